use serde::{Deserialize, Serialize};

use super::common::Paging;
use crate::params::Params;

/// A node of the component tree (project, directory, file...)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentItem {
    pub key: String,
    pub name: Option<String>,
    /// TRK, DIR, FIL, UTS...
    pub qualifier: Option<String>,
    pub path: Option<String>,
    pub language: Option<String>,
    pub project: Option<String>,
    pub branch: Option<String>,
    pub pull_request: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<String>,
    pub analysis_date: Option<String>,
    pub version: Option<String>,
    pub need_issue_sync: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentShowResponse {
    pub component: ComponentItem,
    pub ancestors: Option<Vec<ComponentItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTreeResponse {
    pub paging: Paging,
    pub base_component: ComponentItem,
    #[serde(default)]
    pub components: Vec<ComponentItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSearchResponse {
    pub paging: Paging,
    #[serde(default)]
    pub components: Vec<ComponentItem>,
}

/// Options for `api/components/tree`
#[derive(Debug, Clone, Default)]
pub struct ComponentTreeRequest {
    pub component: String,
    pub asc: Option<bool>,
    pub branch: Option<String>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub pull_request: Option<String>,
    pub q: Option<String>,
    pub qualifiers: Option<Vec<String>>,
    pub s: Option<String>,
    /// `all`, `children` or `leaves`
    pub strategy: Option<String>,
}

impl ComponentTreeRequest {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("component", &self.component)
            .with("asc", self.asc)
            .with("branch", &self.branch)
            .with("p", self.p)
            .with("ps", self.ps)
            .with("pullRequest", &self.pull_request)
            .with("q", &self.q)
            .with("qualifiers", &self.qualifiers)
            .with("s", &self.s)
            .with("strategy", &self.strategy)
    }
}
