use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{SettingSetRequest, SettingsListResponse, SettingsValuesResponse},
    params::Params,
};
use log::{debug, info};
use std::sync::Arc;

/// Settings API operations (`/api/settings`)
#[derive(Debug)]
pub struct SettingsApi {
    transport: Arc<Transport>,
}

impl SettingsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Setting definitions, optionally those applicable to a component
    pub async fn list_definitions(&self, component: Option<&str>) -> SonarQubeResult<SettingsListResponse> {
        debug!("Listing setting definitions");
        let params = Params::new().with("component", component);
        self.transport
            .get_model("/api/settings/list_definitions", &params)
            .await
    }

    /// Remove values so the defaults (or inherited values) apply again
    pub async fn reset(
        &self,
        keys: &[String],
        branch: Option<&str>,
        component: Option<&str>,
        pull_request: Option<&str>,
    ) -> SonarQubeResult<()> {
        info!("Resetting settings {:?}", keys);
        let data = Params::new()
            .with("keys", keys)
            .with("branch", branch)
            .with("component", component)
            .with("pullRequest", pull_request);
        self.transport.post("/api/settings/reset", &data).await?;
        Ok(())
    }

    pub async fn set(&self, request: &SettingSetRequest) -> SonarQubeResult<()> {
        info!("Updating setting {}", request.key);
        self.transport
            .post("/api/settings/set", &request.to_params())
            .await?;
        Ok(())
    }

    pub async fn values(
        &self,
        component: Option<&str>,
        keys: Option<&[String]>,
    ) -> SonarQubeResult<SettingsValuesResponse> {
        debug!("Getting setting values");
        let params = Params::new()
            .with("component", component)
            .with("keys", keys);
        self.transport.get_model("/api/settings/values", &params).await
    }
}
