use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{
        ComponentMeasuresResponse, ComponentTreeMeasuresRequest,
        ComponentTreeMeasuresResponse, SearchHistoryRequest, SearchHistoryResponse,
    },
    params::Params,
};
use log::debug;
use std::sync::Arc;

/// Measures API operations (`/api/measures`)
#[derive(Debug)]
pub struct MeasuresApi {
    transport: Arc<Transport>,
}

impl MeasuresApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Measures of a single component
    ///
    /// # Arguments
    /// * `component` - Component key
    /// * `metric_keys` - e.g. `["coverage", "bugs"]`
    /// * `additional_fields` - `metrics`, `period`
    pub async fn component(
        &self,
        component: &str,
        metric_keys: &[String],
        additional_fields: Option<&[String]>,
        branch: Option<&str>,
        pull_request: Option<&str>,
    ) -> SonarQubeResult<ComponentMeasuresResponse> {
        debug!("Getting measures of {}", component);
        let params = Params::new()
            .with("component", component)
            .with("metricKeys", metric_keys)
            .with("additionalFields", additional_fields)
            .with("branch", branch)
            .with("pullRequest", pull_request);
        self.transport
            .get_model("/api/measures/component", &params)
            .await
    }

    /// Measures of a component's descendants
    pub async fn component_tree(
        &self,
        request: &ComponentTreeMeasuresRequest,
    ) -> SonarQubeResult<ComponentTreeMeasuresResponse> {
        debug!("Getting measure tree of {}", request.component);
        self.transport
            .get_model("/api/measures/component_tree", &request.to_params())
            .await
    }

    pub async fn search_history(&self, request: &SearchHistoryRequest) -> SonarQubeResult<SearchHistoryResponse> {
        debug!("Getting measure history of {}", request.component);
        self.transport
            .get_model("/api/measures/search_history", &request.to_params())
            .await
    }
}
