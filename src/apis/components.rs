use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{ComponentSearchResponse, ComponentShowResponse, ComponentTreeRequest, ComponentTreeResponse},
    params::Params,
};
use log::debug;
use std::sync::Arc;

/// Components API operations (`/api/components`)
#[derive(Debug)]
pub struct ComponentsApi {
    transport: Arc<Transport>,
}

impl ComponentsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Component details and its ancestors
    pub async fn show(
        &self,
        component: &str,
        branch: Option<&str>,
        pull_request: Option<&str>,
    ) -> SonarQubeResult<ComponentShowResponse> {
        debug!("Showing component {}", component);
        let params = Params::new()
            .with("component", component)
            .with("branch", branch)
            .with("pullRequest", pull_request);
        self.transport.get_model("/api/components/show", &params).await
    }

    /// Navigate the descendants of a component
    pub async fn tree(&self, request: &ComponentTreeRequest) -> SonarQubeResult<ComponentTreeResponse> {
        debug!("Listing component tree of {}", request.component);
        self.transport
            .get_model("/api/components/tree", &request.to_params())
            .await
    }

    /// Search components by qualifier
    ///
    /// # Arguments
    /// * `qualifiers` - e.g. `["TRK"]`; sent comma-joined
    pub async fn search(
        &self,
        qualifiers: &[String],
        p: Option<u32>,
        ps: Option<u32>,
        q: Option<&str>,
    ) -> SonarQubeResult<ComponentSearchResponse> {
        debug!("Searching components");
        let params = Params::new()
            .with("qualifiers", qualifiers)
            .with("p", p)
            .with("ps", ps)
            .with("q", q);
        self.transport.get_model("/api/components/search", &params).await
    }
}
