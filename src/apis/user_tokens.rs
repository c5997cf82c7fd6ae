use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{UserTokenGenerateResponse, UserTokenSearchResponse},
    params::Params,
};
use log::{debug, info};
use std::sync::Arc;

/// User tokens API operations (`/api/user_tokens`)
#[derive(Debug)]
pub struct UserTokensApi {
    transport: Arc<Transport>,
}

impl UserTokensApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Generate a token
    ///
    /// # Arguments
    /// * `name` - Token name, unique per user
    /// * `login` - Owner; defaults to the caller
    /// * `expiration_date` - `YYYY-MM-DD`
    /// * `project_key` - Required for project analysis tokens
    /// * `token_type` - USER_TOKEN, GLOBAL_ANALYSIS_TOKEN or PROJECT_ANALYSIS_TOKEN
    pub async fn generate(
        &self,
        name: &str,
        login: Option<&str>,
        expiration_date: Option<&str>,
        project_key: Option<&str>,
        token_type: Option<&str>,
    ) -> SonarQubeResult<UserTokenGenerateResponse> {
        info!("Generating token {}", name);
        let data = Params::new()
            .with("name", name)
            .with("login", login)
            .with("expirationDate", expiration_date)
            .with("projectKey", project_key)
            .with("type", token_type);
        self.transport
            .post_model("/api/user_tokens/generate", &data)
            .await
    }

    pub async fn revoke(&self, name: &str, login: Option<&str>) -> SonarQubeResult<()> {
        info!("Revoking token {}", name);
        let data = Params::new().with("name", name).with("login", login);
        self.transport.post("/api/user_tokens/revoke", &data).await?;
        Ok(())
    }

    pub async fn search(&self, login: Option<&str>) -> SonarQubeResult<UserTokenSearchResponse> {
        debug!("Listing tokens");
        let params = Params::new().with("login", login);
        self.transport
            .get_model("/api/user_tokens/search", &params)
            .await
    }
}
