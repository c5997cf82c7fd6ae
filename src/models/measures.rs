use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::Params;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    pub metric: String,
    /// Raw value as rendered by the server, e.g. "87.5"
    pub value: Option<String>,
    pub period: Option<Value>,
    pub best_value: Option<bool>,
}

impl Measure {
    /// Value parsed as a number, when it is one.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_deref().and_then(|v| v.parse().ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureComponent {
    pub key: String,
    pub name: Option<String>,
    pub qualifier: Option<String>,
    pub path: Option<String>,
    pub language: Option<String>,
    pub measures: Option<Vec<Measure>>,
}

impl MeasureComponent {
    pub fn measure(&self, metric: &str) -> Option<&Measure> {
        self.measures
            .as_deref()
            .and_then(|ms| ms.iter().find(|m| m.metric == metric))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMeasuresResponse {
    pub component: MeasureComponent,
    pub metrics: Option<Vec<Value>>,
    pub period: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTreeMeasuresResponse {
    pub base_component: MeasureComponent,
    #[serde(default)]
    pub components: Vec<MeasureComponent>,
    pub metrics: Option<Vec<Value>>,
    pub paging: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistoryResponse {
    pub paging: Option<Value>,
    #[serde(default)]
    pub measures: Vec<Value>,
}

/// Options for `api/measures/component_tree`
#[derive(Debug, Clone, Default)]
pub struct ComponentTreeMeasuresRequest {
    pub component: String,
    pub metric_keys: Vec<String>,
    pub additional_fields: Option<Vec<String>>,
    pub asc: Option<bool>,
    pub branch: Option<String>,
    pub metric_period_sort: Option<String>,
    pub metric_sort: Option<String>,
    pub metric_sort_filter: Option<String>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub pull_request: Option<String>,
    pub q: Option<String>,
    pub qualifiers: Option<Vec<String>>,
    pub s: Option<String>,
    pub strategy: Option<String>,
}

impl ComponentTreeMeasuresRequest {
    pub fn new(component: impl Into<String>, metric_keys: Vec<String>) -> Self {
        Self {
            component: component.into(),
            metric_keys,
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("component", &self.component)
            .with("metricKeys", &self.metric_keys)
            .with("additionalFields", &self.additional_fields)
            .with("asc", self.asc)
            .with("branch", &self.branch)
            .with("metricPeriodSort", &self.metric_period_sort)
            .with("metricSort", &self.metric_sort)
            .with("metricSortFilter", &self.metric_sort_filter)
            .with("p", self.p)
            .with("ps", self.ps)
            .with("pullRequest", &self.pull_request)
            .with("q", &self.q)
            .with("qualifiers", &self.qualifiers)
            .with("s", &self.s)
            .with("strategy", &self.strategy)
    }
}

/// Options for `api/measures/search_history`
#[derive(Debug, Clone, Default)]
pub struct SearchHistoryRequest {
    pub component: String,
    pub metrics: Vec<String>,
    pub branch: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub pull_request: Option<String>,
}

impl SearchHistoryRequest {
    pub fn new(component: impl Into<String>, metrics: Vec<String>) -> Self {
        Self {
            component: component.into(),
            metrics,
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("component", &self.component)
            .with("metrics", &self.metrics)
            .with("branch", &self.branch)
            .with("from", &self.from)
            .with("p", self.p)
            .with("ps", self.ps)
            .with("pullRequest", &self.pull_request)
            .with("to", &self.to)
    }
}
