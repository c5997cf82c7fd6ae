use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::Params;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityGateCondition {
    pub id: Option<i64>,
    pub metric: String,
    /// LT or GT
    pub op: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGate {
    pub id: Option<String>,
    pub name: String,
    pub is_default: Option<bool>,
    pub is_built_in: Option<bool>,
    pub actions: Option<Value>,
    pub conditions: Option<Vec<QualityGateCondition>>,
    pub cayc_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityGateCreateResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityGateListResponse {
    #[serde(default)]
    pub qualitygates: Vec<QualityGate>,
    /// Id of the default gate
    pub default: Option<String>,
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGateShowResponse {
    pub id: String,
    pub name: String,
    pub is_default: Option<bool>,
    pub is_built_in: Option<bool>,
    pub conditions: Option<Vec<QualityGateCondition>>,
    pub actions: Option<Value>,
    pub cayc_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusCondition {
    /// OK or ERROR
    pub status: String,
    pub metric_key: String,
    pub comparator: String,
    pub error_threshold: Option<String>,
    pub actual_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub status: String,
    pub conditions: Option<Vec<ProjectStatusCondition>>,
    pub periods: Option<Vec<Value>>,
    pub ignored_conditions: Option<bool>,
}

impl ProjectStatus {
    /// True when the quality gate passed
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusResponse {
    pub project_status: ProjectStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConditionResponse {
    pub id: i64,
    pub metric: String,
    pub op: String,
    pub error: String,
}

/// Projects associated (or not) with a quality gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityGateProjectsResponse {
    pub paging: Option<Value>,
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Project selector for `project_status`; set exactly one identifier.
#[derive(Debug, Clone, Default)]
pub struct ProjectStatusRequest {
    pub analysis_id: Option<String>,
    pub branch: Option<String>,
    pub project_id: Option<String>,
    pub project_key: Option<String>,
    pub pull_request: Option<String>,
}

impl ProjectStatusRequest {
    pub fn project(key: impl Into<String>) -> Self {
        Self {
            project_key: Some(key.into()),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("analysisId", &self.analysis_id)
            .with("branch", &self.branch)
            .with("projectId", &self.project_id)
            .with("projectKey", &self.project_key)
            .with("pullRequest", &self.pull_request)
    }
}
