use crate::error::{SonarQubeError, SonarQubeResult};
use base64::{engine::general_purpose, Engine};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::fmt;

/// Authentication provider for the SonarQube API
///
/// Implementations only produce the headers to attach to every request.
pub trait Authentication: Send + Sync + fmt::Debug {
    /// Headers carrying the credentials
    fn auth_headers(&self) -> SonarQubeResult<HeaderMap>;
}

fn basic_header(credentials: &str) -> SonarQubeResult<HeaderMap> {
    let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
    let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))
        .map_err(|e| SonarQubeError::config(format!("Invalid auth header: {}", e)))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// User token authentication
///
/// SonarQube expects the token as the Basic-auth username with an empty
/// password (`token:`).
#[derive(Clone)]
pub struct TokenAuth {
    token: String,
}

impl TokenAuth {
    pub fn new(token: impl Into<String>) -> SonarQubeResult<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(SonarQubeError::config("Token cannot be empty"));
        }
        Ok(Self { token })
    }
}

impl fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuth").field("token", &"***").finish()
    }
}

impl Authentication for TokenAuth {
    fn auth_headers(&self) -> SonarQubeResult<HeaderMap> {
        basic_header(&format!("{}:", self.token))
    }
}

/// Basic authentication using username/password
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> SonarQubeResult<Self> {
        let username = username.into();
        if username.is_empty() {
            return Err(SonarQubeError::config("Username cannot be empty"));
        }
        Ok(Self {
            username,
            password: password.into(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Authentication for BasicAuth {
    fn auth_headers(&self) -> SonarQubeResult<HeaderMap> {
        basic_header(&format!("{}:{}", self.username, self.password))
    }
}

/// Pick an authentication provider from loose credentials.
///
/// A token wins over username/password. Empty strings count as not
/// supplied. Returns `None` for anonymous access.
pub fn create_auth(
    token: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> SonarQubeResult<Option<Box<dyn Authentication>>> {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        return Ok(Some(Box::new(TokenAuth::new(token)?)));
    }
    if let Some(username) = username.filter(|u| !u.is_empty()) {
        let password = password.ok_or_else(|| {
            SonarQubeError::config("Password is required when username is provided")
        })?;
        return Ok(Some(Box::new(BasicAuth::new(username, password)?)));
    }
    Ok(None)
}
