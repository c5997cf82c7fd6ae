use crate::{
    apis::unwrap_nested,
    error::SonarQubeResult,
    http::Transport,
    models::{
        CurrentUserResponse, User, UserCreateRequest, UserCreateResponse,
        UserGroupsResponse, UserSearchRequest, UserSearchResponse,
    },
    params::Params,
};
use log::{debug, info};
use std::sync::Arc;

/// Users API operations (`/api/users`)
#[derive(Debug)]
pub struct UsersApi {
    transport: Arc<Transport>,
}

impl UsersApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Anonymize a deactivated user
    pub async fn anonymize(&self, login: &str) -> SonarQubeResult<()> {
        info!("Anonymizing user {}", login);
        let data = Params::new().with("login", login);
        self.transport.post("/api/users/anonymize", &data).await?;
        Ok(())
    }

    pub async fn create(&self, request: &UserCreateRequest) -> SonarQubeResult<UserCreateResponse> {
        info!("Creating user {}", request.login);
        self.transport
            .post_model("/api/users/create", &request.to_params())
            .await
    }

    pub async fn current(&self) -> SonarQubeResult<CurrentUserResponse> {
        debug!("Getting current user");
        self.transport
            .get_model("/api/users/current", &Params::new())
            .await
    }

    pub async fn deactivate(&self, login: &str, anonymize: Option<bool>) -> SonarQubeResult<User> {
        info!("Deactivating user {}", login);
        let data = Params::new()
            .with("login", login)
            .with("anonymize", anonymize);
        let response = self.transport.post("/api/users/deactivate", &data).await?;
        unwrap_nested(response, "user")
    }

    /// Groups a user belongs to
    ///
    /// # Arguments
    /// * `selected` - `selected`, `deselected` or `all`
    pub async fn groups(
        &self,
        login: &str,
        p: Option<u32>,
        ps: Option<u32>,
        q: Option<&str>,
        selected: Option<&str>,
    ) -> SonarQubeResult<UserGroupsResponse> {
        debug!("Listing groups of user {}", login);
        let params = Params::new()
            .with("login", login)
            .with("p", p)
            .with("ps", ps)
            .with("q", q)
            .with("selected", selected);
        self.transport.get_model("/api/users/groups", &params).await
    }

    pub async fn search(&self, request: &UserSearchRequest) -> SonarQubeResult<UserSearchResponse> {
        debug!("Searching users");
        self.transport
            .get_model("/api/users/search", &request.to_params())
            .await
    }

    /// Update profile fields; unset fields are left unchanged.
    pub async fn update(
        &self,
        login: &str,
        email: Option<&str>,
        name: Option<&str>,
        scm_accounts: Option<&[String]>,
    ) -> SonarQubeResult<User> {
        info!("Updating user {}", login);
        let data = Params::new()
            .with("login", login)
            .with("email", email)
            .with("name", name)
            .with_each("scmAccount", scm_accounts);
        let response = self.transport.post("/api/users/update", &data).await?;
        unwrap_nested(response, "user")
    }

    pub async fn update_login(&self, login: &str, new_login: &str) -> SonarQubeResult<()> {
        info!("Changing login {} to {}", login, new_login);
        let data = Params::new()
            .with("login", login)
            .with("newLogin", new_login);
        self.transport.post("/api/users/update_login", &data).await?;
        Ok(())
    }
}
