use crate::{
    apis::unwrap_nested,
    error::SonarQubeResult,
    http::Transport,
    models::{
        Rule, RuleCreateRequest, RuleRepositoriesResponse, RuleSearchRequest,
        RuleSearchResponse, RuleShowResponse, RuleTagsResponse, RuleUpdateRequest,
    },
    params::Params,
};
use log::{debug, info};
use std::sync::Arc;

/// Rules API operations (`/api/rules`)
#[derive(Debug)]
pub struct RulesApi {
    transport: Arc<Transport>,
}

impl RulesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Create a custom rule from a template
    pub async fn create(&self, request: &RuleCreateRequest) -> SonarQubeResult<Rule> {
        info!("Creating custom rule {} from {}", request.custom_key, request.template_key);
        let response = self
            .transport
            .post("/api/rules/create", &request.to_params())
            .await?;
        unwrap_nested(response, "rule")
    }

    /// Delete a custom rule
    pub async fn delete(&self, key: &str) -> SonarQubeResult<()> {
        info!("Deleting rule {}", key);
        let data = Params::new().with("key", key);
        self.transport.post("/api/rules/delete", &data).await?;
        Ok(())
    }

    pub async fn repositories(
        &self,
        language: Option<&str>,
        q: Option<&str>,
    ) -> SonarQubeResult<RuleRepositoriesResponse> {
        debug!("Listing rule repositories");
        let params = Params::new().with("language", language).with("q", q);
        self.transport.get_model("/api/rules/repositories", &params).await
    }

    pub async fn search(&self, request: &RuleSearchRequest) -> SonarQubeResult<RuleSearchResponse> {
        debug!("Searching rules");
        self.transport
            .get_model("/api/rules/search", &request.to_params())
            .await
    }

    /// Show a rule, optionally with its activations in quality profiles.
    pub async fn show(&self, key: &str, actives: Option<bool>) -> SonarQubeResult<RuleShowResponse> {
        debug!("Showing rule {}", key);
        let params = Params::new().with("key", key).with("actives", actives);
        self.transport.get_model("/api/rules/show", &params).await
    }

    pub async fn tags(&self, ps: Option<u32>, q: Option<&str>) -> SonarQubeResult<RuleTagsResponse> {
        debug!("Listing rule tags");
        let params = Params::new().with("ps", ps).with("q", q);
        self.transport.get_model("/api/rules/tags", &params).await
    }

    pub async fn update(&self, request: &RuleUpdateRequest) -> SonarQubeResult<Rule> {
        info!("Updating rule {}", request.key);
        let response = self
            .transport
            .post("/api/rules/update", &request.to_params())
            .await?;
        unwrap_nested(response, "rule")
    }
}
