use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{HotspotSearchRequest, HotspotSearchResponse, HotspotShowResponse},
    params::Params,
};
use log::{debug, info};
use std::sync::Arc;

/// Security hotspots API operations (`/api/hotspots`)
#[derive(Debug)]
pub struct HotspotsApi {
    transport: Arc<Transport>,
}

impl HotspotsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn post_unit(&self, path: &str, data: Params) -> SonarQubeResult<()> {
        self.transport.post(path, &data).await?;
        Ok(())
    }

    /// Review a hotspot
    ///
    /// # Arguments
    /// * `status` - TO_REVIEW or REVIEWED
    /// * `resolution` - Required with REVIEWED: FIXED, SAFE or ACKNOWLEDGED
    pub async fn change_status(
        &self,
        hotspot: &str,
        status: &str,
        comment: Option<&str>,
        resolution: Option<&str>,
    ) -> SonarQubeResult<()> {
        info!("Changing status of hotspot {} to {}", hotspot, status);
        let data = Params::new()
            .with("hotspot", hotspot)
            .with("status", status)
            .with("comment", comment)
            .with("resolution", resolution);
        self.post_unit("/api/hotspots/change_status", data).await
    }

    pub async fn search(&self, request: &HotspotSearchRequest) -> SonarQubeResult<HotspotSearchResponse> {
        debug!("Searching hotspots");
        self.transport
            .get_model("/api/hotspots/search", &request.to_params())
            .await
    }

    pub async fn show(&self, hotspot: &str) -> SonarQubeResult<HotspotShowResponse> {
        debug!("Showing hotspot {}", hotspot);
        let params = Params::new().with("hotspot", hotspot);
        self.transport.get_model("/api/hotspots/show", &params).await
    }

    pub async fn assign(
        &self,
        hotspot: &str,
        assignee: Option<&str>,
        comment: Option<&str>,
    ) -> SonarQubeResult<()> {
        info!("Assigning hotspot {} to {:?}", hotspot, assignee);
        let data = Params::new()
            .with("hotspot", hotspot)
            .with("assignee", assignee)
            .with("comment", comment);
        self.post_unit("/api/hotspots/assign", data).await
    }

    pub async fn add_comment(&self, hotspot: &str, comment: &str) -> SonarQubeResult<()> {
        info!("Commenting on hotspot {}", hotspot);
        let data = Params::new()
            .with("hotspot", hotspot)
            .with("comment", comment);
        self.post_unit("/api/hotspots/add_comment", data).await
    }
}
