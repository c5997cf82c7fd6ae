use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{
        ExportFindingsResponse, LicenseUsageResponse, ProjectCreateRequest,
        ProjectCreateResponse, ProjectSearchRequest, ProjectSearchResponse, Visibility,
    },
    params::Params,
};
use log::{debug, info};
use std::sync::Arc;

/// Projects API operations (`/api/projects`)
#[derive(Debug)]
pub struct ProjectsApi {
    transport: Arc<Transport>,
}

impl ProjectsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Delete every project matching the filters (max 1000 per call).
    ///
    /// Requires 'Administer System' permission.
    pub async fn bulk_delete(&self, filters: &ProjectSearchRequest) -> SonarQubeResult<()> {
        info!("Bulk deleting projects");
        let data = filters.to_bulk_delete_params();
        debug!("bulk_delete filters: {:?}", data.present());
        self.transport.post("/api/projects/bulk_delete", &data).await?;
        Ok(())
    }

    /// Create a project
    ///
    /// # Arguments
    /// * `request` - Name, key and optional settings of the new project
    pub async fn create(&self, request: &ProjectCreateRequest) -> SonarQubeResult<ProjectCreateResponse> {
        info!("Creating project: {}", request.project);
        self.transport
            .post_model("/api/projects/create", &request.to_params())
            .await
    }

    pub async fn delete(&self, project: &str) -> SonarQubeResult<()> {
        info!("Deleting project: {}", project);
        let data = Params::new().with("project", project);
        self.transport.post("/api/projects/delete", &data).await?;
        Ok(())
    }

    /// Export all findings of a project, optionally for a branch or pull request.
    pub async fn export_findings(
        &self,
        project: &str,
        branch: Option<&str>,
        pull_request: Option<&str>,
    ) -> SonarQubeResult<ExportFindingsResponse> {
        debug!("Exporting findings for project: {}", project);
        let params = Params::new()
            .with("project", project)
            .with("branch", branch)
            .with("pullRequest", pull_request);
        self.transport
            .get_model("/api/projects/export_findings", &params)
            .await
    }

    pub async fn license_usage(&self) -> SonarQubeResult<LicenseUsageResponse> {
        debug!("Getting license usage");
        self.transport
            .get_model("/api/projects/license_usage", &Params::new())
            .await
    }

    /// Search projects visible to the current user
    pub async fn search(&self, request: &ProjectSearchRequest) -> SonarQubeResult<ProjectSearchResponse> {
        debug!("Searching projects");
        self.transport
            .get_model("/api/projects/search", &request.to_params())
            .await
    }

    /// Change a project key
    ///
    /// # Arguments
    /// * `from` - Current key
    /// * `to` - New key
    pub async fn update_key(&self, from: &str, to: &str) -> SonarQubeResult<()> {
        info!("Renaming project key {} -> {}", from, to);
        let data = Params::new().with("from", from).with("to", to);
        self.transport.post("/api/projects/update_key", &data).await?;
        Ok(())
    }

    pub async fn update_visibility(&self, project: &str, visibility: Visibility) -> SonarQubeResult<()> {
        info!("Setting visibility of {} to {}", project, visibility.as_str());
        let data = Params::new()
            .with("project", project)
            .with("visibility", visibility);
        self.transport
            .post("/api/projects/update_visibility", &data)
            .await?;
        Ok(())
    }
}
