use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Project / application visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// Paging information returned by paginated endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// 1-based page index
    pub page_index: u64,
    pub page_size: u64,
    pub total: u64,
}

impl Paging {
    /// Number of pages needed to hold `total` items.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 1
    }
}

/// A component (project, application, portfolio, file...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub key: String,
    pub name: String,
    /// TRK=project, APP=application, VW=portfolio
    pub qualifier: Option<String>,
    pub visibility: Option<String>,
    /// Parent project key for sub-components
    pub project: Option<String>,
}

/// A project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub key: String,
    pub name: String,
    #[serde(default = "default_project_qualifier")]
    pub qualifier: String,
    pub visibility: Option<String>,
    pub last_analysis_date: Option<String>,
    pub revision: Option<String>,
    pub managed: Option<bool>,
}

pub(crate) fn default_project_qualifier() -> String {
    "TRK".to_string()
}

/// A project or application branch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub is_main: bool,
    /// LONG, SHORT, BRANCH or PULL_REQUEST
    #[serde(rename = "type")]
    pub branch_type: Option<String>,
    pub status: Option<Value>,
    pub analysis_date: Option<String>,
}

/// One entry of the `errors` list in a failed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub msg: String,
}

/// Error payload: `{"errors": [{"msg": "..."}]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorMessage>,
}
