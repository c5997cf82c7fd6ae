use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{
        CreateConditionResponse, ProjectStatusRequest, ProjectStatusResponse,
        QualityGateCreateResponse, QualityGateListResponse, QualityGateProjectsResponse,
        QualityGateShowResponse,
    },
    params::Params,
};
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

/// Quality gates API operations (`/api/qualitygates`)
#[derive(Debug)]
pub struct QualityGatesApi {
    transport: Arc<Transport>,
}

impl QualityGatesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Copy `source_name` into a new gate called `name`
    pub async fn copy(&self, source_name: &str, name: &str) -> SonarQubeResult<QualityGateCreateResponse> {
        info!("Copying quality gate {} to {}", source_name, name);
        let data = Params::new()
            .with("sourceName", source_name)
            .with("name", name);
        self.transport.post_model("/api/qualitygates/copy", &data).await
    }

    pub async fn create(&self, name: &str) -> SonarQubeResult<QualityGateCreateResponse> {
        info!("Creating quality gate {}", name);
        let data = Params::new().with("name", name);
        self.transport.post_model("/api/qualitygates/create", &data).await
    }

    /// Add a condition to a gate
    ///
    /// # Arguments
    /// * `gate_name` - Gate to modify
    /// * `metric` - Metric key, e.g. `new_coverage`
    /// * `error` - Threshold
    /// * `op` - `LT` or `GT`; server default when `None`
    pub async fn create_condition(
        &self,
        gate_name: &str,
        metric: &str,
        error: &str,
        op: Option<&str>,
    ) -> SonarQubeResult<CreateConditionResponse> {
        info!("Adding condition on {} to quality gate {}", metric, gate_name);
        let data = Params::new()
            .with("gateName", gate_name)
            .with("metric", metric)
            .with("error", error)
            .with("op", op);
        self.transport
            .post_model("/api/qualitygates/create_condition", &data)
            .await
    }

    pub async fn delete_condition(&self, id: i64) -> SonarQubeResult<()> {
        info!("Deleting quality gate condition {}", id);
        let data = Params::new().with("id", id);
        self.transport
            .post("/api/qualitygates/delete_condition", &data)
            .await?;
        Ok(())
    }

    /// Detach a project from its gate so it falls back to the default
    pub async fn deselect(&self, project_key: Option<&str>) -> SonarQubeResult<()> {
        info!("Deselecting quality gate for {:?}", project_key);
        let data = Params::new().with("projectKey", project_key);
        self.transport.post("/api/qualitygates/deselect", &data).await?;
        Ok(())
    }

    pub async fn destroy(&self, name: &str) -> SonarQubeResult<()> {
        info!("Deleting quality gate {}", name);
        let data = Params::new().with("name", name);
        self.transport.post("/api/qualitygates/destroy", &data).await?;
        Ok(())
    }

    pub async fn get_by_project(&self, project: &str) -> SonarQubeResult<Value> {
        debug!("Getting quality gate of project {}", project);
        let params = Params::new().with("project", project);
        self.transport
            .get("/api/qualitygates/get_by_project", &params)
            .await
    }

    pub async fn list(&self) -> SonarQubeResult<QualityGateListResponse> {
        debug!("Listing quality gates");
        self.transport
            .get_model("/api/qualitygates/list", &Params::new())
            .await
    }

    /// Quality gate status of a project, branch, pull request or analysis
    pub async fn project_status(&self, request: &ProjectStatusRequest) -> SonarQubeResult<ProjectStatusResponse> {
        debug!("Getting quality gate status");
        self.transport
            .get_model("/api/qualitygates/project_status", &request.to_params())
            .await
    }

    pub async fn rename(&self, current_name: &str, name: &str) -> SonarQubeResult<()> {
        info!("Renaming quality gate {} to {}", current_name, name);
        let data = Params::new()
            .with("currentName", current_name)
            .with("name", name);
        self.transport.post("/api/qualitygates/rename", &data).await?;
        Ok(())
    }

    /// Projects associated with a gate
    ///
    /// # Arguments
    /// * `selected` - `selected`, `deselected` or `all`
    pub async fn search(
        &self,
        gate_name: &str,
        page: Option<u32>,
        page_size: Option<u32>,
        query: Option<&str>,
        selected: Option<&str>,
    ) -> SonarQubeResult<QualityGateProjectsResponse> {
        debug!("Searching projects of quality gate {}", gate_name);
        let params = Params::new()
            .with("gateName", gate_name)
            .with("page", page)
            .with("pageSize", page_size)
            .with("query", query)
            .with("selected", selected);
        self.transport.get_model("/api/qualitygates/search", &params).await
    }

    pub async fn select(&self, gate_name: &str, project_key: Option<&str>) -> SonarQubeResult<()> {
        info!("Selecting quality gate {} for {:?}", gate_name, project_key);
        let data = Params::new()
            .with("gateName", gate_name)
            .with("projectKey", project_key);
        self.transport.post("/api/qualitygates/select", &data).await?;
        Ok(())
    }

    pub async fn set_as_default(&self, name: &str) -> SonarQubeResult<()> {
        info!("Setting default quality gate to {}", name);
        let data = Params::new().with("name", name);
        self.transport
            .post("/api/qualitygates/set_as_default", &data)
            .await?;
        Ok(())
    }

    pub async fn show(&self, name: Option<&str>) -> SonarQubeResult<QualityGateShowResponse> {
        debug!("Showing quality gate {:?}", name);
        let params = Params::new().with("name", name);
        self.transport.get_model("/api/qualitygates/show", &params).await
    }

    pub async fn update_condition(
        &self,
        id: i64,
        error: &str,
        metric: &str,
        op: Option<&str>,
    ) -> SonarQubeResult<()> {
        info!("Updating quality gate condition {}", id);
        let data = Params::new()
            .with("id", id)
            .with("error", error)
            .with("metric", metric)
            .with("op", op);
        self.transport
            .post("/api/qualitygates/update_condition", &data)
            .await?;
        Ok(())
    }
}
