use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserToken {
    pub name: String,
    pub created_at: Option<String>,
    pub last_connection_date: Option<String>,
    /// USER_TOKEN, GLOBAL_ANALYSIS_TOKEN, PROJECT_ANALYSIS_TOKEN
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub expiration_date: Option<String>,
    pub is_expired: Option<bool>,
    pub project: Option<Value>,
}

/// Freshly generated token. `token` is only ever returned once.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTokenGenerateResponse {
    pub login: String,
    pub name: String,
    pub token: String,
    pub created_at: Option<String>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub expiration_date: Option<String>,
}

impl fmt::Debug for UserTokenGenerateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserTokenGenerateResponse")
            .field("login", &self.login)
            .field("name", &self.name)
            .field("token", &"***")
            .field("created_at", &self.created_at)
            .field("token_type", &self.token_type)
            .field("expiration_date", &self.expiration_date)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTokenSearchResponse {
    pub login: String,
    #[serde(default)]
    pub user_tokens: Vec<UserToken>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_response_debug_masks_token() {
        let resp: UserTokenGenerateResponse = serde_json::from_value(json!({
            "login": "admin",
            "name": "ci",
            "token": "squ_abcdef",
            "type": "USER_TOKEN"
        }))
        .unwrap();
        assert_eq!(resp.token, "squ_abcdef");
        assert!(!format!("{:?}", resp).contains("squ_abcdef"));
    }

    #[test]
    fn test_search_response() {
        let resp: UserTokenSearchResponse = serde_json::from_value(json!({
            "login": "admin",
            "userTokens": [{"name": "ci", "isExpired": false}]
        }))
        .unwrap();
        assert_eq!(resp.user_tokens[0].is_expired, Some(false));
    }
}
