use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{default_project_qualifier, Paging, Visibility};
use crate::params::Params;

/// Project entry returned by `api/projects/search` and `api/projects/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectComponent {
    pub key: String,
    pub name: String,
    #[serde(default = "default_project_qualifier")]
    pub qualifier: String,
    pub visibility: Option<String>,
    pub last_analysis_date: Option<String>,
    pub revision: Option<String>,
    pub managed: Option<bool>,
    pub is_favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "needIssueSync")]
    pub needs_issue_sync: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSearchResponse {
    pub paging: Paging,
    #[serde(default)]
    pub components: Vec<ProjectComponent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreateResponse {
    pub project: ProjectComponent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFindingsResponse {
    pub export_date: Option<String>,
    pub findings: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseUsageResponse {
    pub lines_of_code: Option<u64>,
}

/// Parameters for creating a project
#[derive(Debug, Clone, Default)]
pub struct ProjectCreateRequest {
    /// Display name (max 500 characters)
    pub name: String,
    /// Unique project key
    pub project: String,
    pub main_branch: Option<String>,
    pub new_code_definition_type: Option<String>,
    pub new_code_definition_value: Option<String>,
    pub visibility: Option<Visibility>,
}

impl ProjectCreateRequest {
    pub fn new(name: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            ..Default::default()
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn main_branch(mut self, branch: impl Into<String>) -> Self {
        self.main_branch = Some(branch.into());
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("name", &self.name)
            .with("project", &self.project)
            .with("mainBranch", &self.main_branch)
            .with("newCodeDefinitionType", &self.new_code_definition_type)
            .with("newCodeDefinitionValue", &self.new_code_definition_value)
            .with("visibility", &self.visibility)
    }
}

/// Filters for `search` and `bulk_delete`
///
/// `p`, `ps` and `s` only apply to search.
#[derive(Debug, Clone, Default)]
pub struct ProjectSearchRequest {
    /// ISO date; only projects last analysed before it
    pub analyzed_before: Option<String>,
    pub on_provisioned_only: Option<bool>,
    pub projects: Option<Vec<String>>,
    pub q: Option<String>,
    /// TRK, VW, APP
    pub qualifiers: Option<Vec<String>>,
    pub visibility: Option<Visibility>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub s: Option<String>,
}

impl ProjectSearchRequest {
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }

    fn filters(&self) -> Params {
        Params::new()
            .with("analyzedBefore", &self.analyzed_before)
            .with("onProvisionedOnly", self.on_provisioned_only)
            .with("projects", &self.projects)
            .with("q", &self.q)
            .with("qualifiers", &self.qualifiers)
            .with("visibility", &self.visibility)
    }

    pub(crate) fn to_params(&self) -> Params {
        self.filters()
            .with("p", self.p)
            .with("ps", self.ps)
            .with("s", &self.s)
    }

    pub(crate) fn to_bulk_delete_params(&self) -> Params {
        self.filters()
    }
}
