use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLine {
    pub line: u32,
    /// HTML-highlighted code
    pub code: Option<String>,
    pub scm_revision: Option<String>,
    pub scm_author: Option<String>,
    pub scm_date: Option<String>,
    pub duplicated: Option<bool>,
    pub is_new: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesResponse {
    #[serde(default)]
    pub sources: Vec<SourceLine>,
}

/// Blame data: one `[line, author, date, revision]` tuple per entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScmResponse {
    pub scm: Option<Vec<Vec<Value>>>,
}
