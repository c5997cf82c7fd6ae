use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Component, Paging};
use crate::params::Params;

/// A security hotspot as listed by search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub key: String,
    pub component: String,
    pub project: String,
    pub security_category: Option<String>,
    /// HIGH, MEDIUM, LOW
    pub vulnerability_probability: Option<String>,
    pub status: Option<String>,
    pub resolution: Option<String>,
    pub line: Option<u32>,
    pub message: Option<String>,
    pub assignee: Option<String>,
    pub author: Option<String>,
    pub creation_date: Option<String>,
    pub update_date: Option<String>,
    pub flows: Option<Vec<Value>>,
    pub rule_key: Option<String>,
    pub text_range: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotSearchResponse {
    pub paging: Paging,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
    pub components: Option<Vec<Component>>,
}

/// Full hotspot detail; nested objects are left untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotShowResponse {
    pub key: String,
    pub component: Option<Value>,
    pub project: Option<Value>,
    pub rule: Option<Value>,
    pub status: Option<String>,
    pub resolution: Option<String>,
    pub message: Option<String>,
    pub line: Option<u32>,
    pub author: Option<String>,
    pub creation_date: Option<String>,
    pub update_date: Option<String>,
    pub changelog: Option<Vec<Value>>,
    pub comment: Option<Vec<Value>>,
    pub users: Option<Vec<Value>>,
    pub can_change_status: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct HotspotSearchRequest {
    pub branch: Option<String>,
    pub files: Option<Vec<String>>,
    pub hotspots: Option<Vec<String>>,
    pub in_new_code_period: Option<bool>,
    pub only_mine: Option<bool>,
    pub owasp_asvs_level: Option<String>,
    pub p: Option<u32>,
    pub project_key: Option<String>,
    pub ps: Option<u32>,
    pub pull_request: Option<String>,
    /// FIXED, SAFE, ACKNOWLEDGED
    pub resolution: Option<String>,
    /// TO_REVIEW, REVIEWED
    pub status: Option<String>,
}

impl HotspotSearchRequest {
    pub fn project(key: impl Into<String>) -> Self {
        Self {
            project_key: Some(key.into()),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("branch", &self.branch)
            .with("files", &self.files)
            .with("hotspots", &self.hotspots)
            .with("inNewCodePeriod", self.in_new_code_period)
            .with("onlyMine", self.only_mine)
            .with("owaspAsvsLevel", &self.owasp_asvs_level)
            .with("p", self.p)
            .with("projectKey", &self.project_key)
            .with("ps", self.ps)
            .with("pullRequest", &self.pull_request)
            .with("resolution", &self.resolution)
            .with("status", &self.status)
    }
}
