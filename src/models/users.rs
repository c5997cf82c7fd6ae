use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Paging;
use crate::params::Params;

/// A SonarQube user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub email: Option<String>,
    pub local: Option<bool>,
    pub external_identity: Option<String>,
    pub external_provider: Option<String>,
    pub groups: Option<Vec<String>>,
    pub tokens_count: Option<u32>,
    pub last_connection_date: Option<String>,
    pub sonar_lint_last_connection_date: Option<String>,
    pub avatar: Option<String>,
    pub managed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchResponse {
    pub paging: Paging,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreateResponse {
    pub user: User,
}

/// The authenticated (or anonymous) caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub local: Option<bool>,
    pub groups: Option<Vec<String>>,
    pub permissions: Option<Value>,
    pub is_logged_in: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserGroupsResponse {
    pub paging: Paging,
    #[serde(default)]
    pub groups: Vec<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct UserCreateRequest {
    pub login: String,
    pub name: String,
    pub email: Option<String>,
    /// False for accounts authenticated by an external provider
    pub local: Option<bool>,
    pub password: Option<String>,
    pub scm_accounts: Option<Vec<String>>,
}

impl UserCreateRequest {
    pub fn new(login: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("login", &self.login)
            .with("name", &self.name)
            .with("email", &self.email)
            .with("local", self.local)
            .with("password", &self.password)
            .with_each("scmAccount", self.scm_accounts.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserSearchRequest {
    pub active: Option<bool>,
    pub external_identity: Option<String>,
    pub last_connected_after: Option<String>,
    pub last_connected_before: Option<String>,
    pub managed: Option<bool>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub q: Option<String>,
    pub sonar_lint_last_connection_date_from: Option<String>,
    pub sonar_lint_last_connection_date_to: Option<String>,
}

impl UserSearchRequest {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("active", self.active)
            .with("externalIdentity", &self.external_identity)
            .with("lastConnectedAfter", &self.last_connected_after)
            .with("lastConnectedBefore", &self.last_connected_before)
            .with("managed", self.managed)
            .with("p", self.p)
            .with("ps", self.ps)
            .with("q", &self.q)
            .with(
                "sonarLintLastConnectionDateFrom",
                &self.sonar_lint_last_connection_date_from,
            )
            .with(
                "sonarLintLastConnectionDateTo",
                &self.sonar_lint_last_connection_date_to,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_user() {
        let me: CurrentUserResponse = serde_json::from_value(json!({
            "login": "admin",
            "isLoggedIn": true,
            "permissions": {"global": ["admin"]}
        }))
        .unwrap();
        assert_eq!(me.is_logged_in, Some(true));
        assert!(me.permissions.is_some());
    }

    #[test]
    fn test_create_request_repeats_scm_accounts() {
        let mut req = UserCreateRequest::new("jdoe", "John Doe").password("s3cret");
        req.scm_accounts = Some(vec!["jdoe".into(), "john@example.com".into()]);
        let params = req.to_params();
        assert_eq!(params.get_all("scmAccount"), vec!["jdoe", "john@example.com"]);
        assert!(!params.contains("email"));
        assert!(!params.contains("local"));
    }
}
