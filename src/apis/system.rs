use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{SystemHealth, SystemStatus, SystemUpgradesResponse},
    params::Params,
};
use log::{debug, info};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// System API operations (`/api/system`)
#[derive(Debug)]
pub struct SystemApi {
    transport: Arc<Transport>,
}

impl SystemApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn db_migration_status(&self) -> SonarQubeResult<Value> {
        debug!("Getting database migration status");
        self.transport
            .get("/api/system/db_migration_status", &Params::new())
            .await
    }

    pub async fn health(&self) -> SonarQubeResult<SystemHealth> {
        debug!("Getting system health");
        self.transport
            .get_model("/api/system/health", &Params::new())
            .await
    }

    /// Full system information document (requires admin)
    pub async fn info(&self) -> SonarQubeResult<Value> {
        debug!("Getting system info");
        self.transport.get("/api/system/info", &Params::new()).await
    }

    /// Succeeds when the server process is alive
    pub async fn liveness(&self) -> SonarQubeResult<()> {
        debug!("Checking liveness");
        self.transport
            .get("/api/system/liveness", &Params::new())
            .await?;
        Ok(())
    }

    /// Returns the body of `api/system/ping`, normally "pong"
    pub async fn ping(&self) -> SonarQubeResult<String> {
        debug!("Pinging server");
        let body = self
            .transport
            .request_text(Method::GET, "/api/system/ping", None)
            .await?;
        if body.is_empty() {
            return Ok("pong".to_string());
        }
        Ok(body)
    }

    pub async fn restart(&self) -> SonarQubeResult<()> {
        info!("Requesting server restart");
        self.transport
            .post("/api/system/restart", &Params::new())
            .await?;
        Ok(())
    }

    pub async fn status(&self) -> SonarQubeResult<SystemStatus> {
        debug!("Getting system status");
        self.transport
            .get_model("/api/system/status", &Params::new())
            .await
    }

    pub async fn upgrades(&self) -> SonarQubeResult<SystemUpgradesResponse> {
        debug!("Listing available upgrades");
        self.transport
            .get_model("/api/system/upgrades", &Params::new())
            .await
    }
}
