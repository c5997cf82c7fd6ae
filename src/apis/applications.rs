use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{
        ApplicationBranchRequest, ApplicationCreateResponse,
        ApplicationProjectsSearchResponse, ApplicationSearchResponse,
        ApplicationShowResponse, Visibility,
    },
    params::Params,
};
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

/// Applications API operations (`/api/applications`)
#[derive(Debug)]
pub struct ApplicationsApi {
    transport: Arc<Transport>,
}

impl ApplicationsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn post_unit(&self, path: &str, data: Params) -> SonarQubeResult<()> {
        self.transport.post(path, &data).await?;
        Ok(())
    }

    pub async fn add_project(&self, application: &str, project: &str) -> SonarQubeResult<()> {
        info!("Adding project {} to application {}", project, application);
        let data = Params::new()
            .with("application", application)
            .with("project", project);
        self.post_unit("/api/applications/add_project", data).await
    }

    /// Create an application
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `description` - Optional description
    /// * `key` - Optional key; derived from the name by the server otherwise
    /// * `visibility` - Optional visibility
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        key: Option<&str>,
        visibility: Option<Visibility>,
    ) -> SonarQubeResult<ApplicationCreateResponse> {
        info!("Creating application {}", name);
        let data = Params::new()
            .with("name", name)
            .with("description", description)
            .with("key", key)
            .with("visibility", visibility);
        self.transport
            .post_model("/api/applications/create", &data)
            .await
    }

    pub async fn create_branch(&self, request: &ApplicationBranchRequest) -> SonarQubeResult<()> {
        info!("Creating branch {} of application {}", request.branch, request.application);
        self.post_unit("/api/applications/create_branch", request.to_params(None))
            .await
    }

    pub async fn delete(&self, application: &str) -> SonarQubeResult<()> {
        info!("Deleting application {}", application);
        let data = Params::new().with("application", application);
        self.post_unit("/api/applications/delete", data).await
    }

    pub async fn delete_branch(&self, application: &str, branch: &str) -> SonarQubeResult<()> {
        info!("Deleting branch {} of application {}", branch, application);
        let data = Params::new()
            .with("application", application)
            .with("branch", branch);
        self.post_unit("/api/applications/delete_branch", data).await
    }

    pub async fn remove_project(&self, application: &str, project: &str) -> SonarQubeResult<()> {
        info!("Removing project {} from application {}", project, application);
        let data = Params::new()
            .with("application", application)
            .with("project", project);
        self.post_unit("/api/applications/remove_project", data).await
    }

    pub async fn search(
        &self,
        p: Option<u32>,
        ps: Option<u32>,
        q: Option<&str>,
    ) -> SonarQubeResult<ApplicationSearchResponse> {
        debug!("Searching applications");
        let params = Params::new().with("p", p).with("ps", ps).with("q", q);
        self.transport
            .get_model("/api/applications/search", &params)
            .await
    }

    pub async fn search_projects(
        &self,
        application: &str,
        p: Option<u32>,
        ps: Option<u32>,
        q: Option<&str>,
        selected: Option<&str>,
    ) -> SonarQubeResult<ApplicationProjectsSearchResponse> {
        debug!("Searching projects of application {}", application);
        let params = Params::new()
            .with("application", application)
            .with("p", p)
            .with("ps", ps)
            .with("q", q)
            .with("selected", selected);
        self.transport
            .get_model("/api/applications/search_projects", &params)
            .await
    }

    pub async fn set_tags(&self, application: &str, tags: &[String]) -> SonarQubeResult<()> {
        info!("Setting tags of application {}", application);
        let data = Params::new()
            .with("application", application)
            .with("tags", tags);
        self.post_unit("/api/applications/set_tags", data).await
    }

    pub async fn show(&self, application: &str, branch: Option<&str>) -> SonarQubeResult<ApplicationShowResponse> {
        debug!("Showing application {}", application);
        let params = Params::new()
            .with("application", application)
            .with("branch", branch);
        self.transport
            .get_model("/api/applications/show", &params)
            .await
    }

    /// New-code period of an application
    pub async fn show_leak(&self, application: &str, branch: Option<&str>) -> SonarQubeResult<Value> {
        debug!("Showing leak period of application {}", application);
        let params = Params::new()
            .with("application", application)
            .with("branch", branch);
        self.transport
            .get("/api/applications/show_leak", &params)
            .await
    }

    pub async fn update(
        &self,
        application: &str,
        name: &str,
        description: Option<&str>,
    ) -> SonarQubeResult<()> {
        info!("Updating application {}", application);
        let data = Params::new()
            .with("application", application)
            .with("name", name)
            .with("description", description);
        self.post_unit("/api/applications/update", data).await
    }

    /// Rename a branch and redefine its project branches
    pub async fn update_branch(&self, request: &ApplicationBranchRequest, name: &str) -> SonarQubeResult<()> {
        info!("Updating branch {} of application {}", request.branch, request.application);
        self.post_unit("/api/applications/update_branch", request.to_params(Some(name)))
            .await
    }
}
