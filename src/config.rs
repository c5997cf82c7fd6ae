use crate::{
    client::{ClientBuilder, SonarQubeClient},
    error::{SonarQubeError, SonarQubeResult},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_HOST_URL: &str = "SONAR_HOST_URL";
pub const ENV_TOKEN: &str = "SONAR_TOKEN";
pub const ENV_LOGIN: &str = "SONAR_LOGIN";
pub const ENV_PASSWORD: &str = "SONAR_PASSWORD";
pub const ENV_TIMEOUT: &str = "SONAR_TIMEOUT";
pub const ENV_VERIFY_SSL: &str = "SONAR_VERIFY_SSL";

/// Connection settings for a [`SonarQubeClient`]
///
/// Can be deserialized from a config file or read from `SONAR_*`
/// environment variables. Credentials are never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

fn default_timeout_secs() -> f64 {
    30.0
}

fn default_verify_ssl() -> bool {
    true
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            username: None,
            password: None,
            timeout_secs: default_timeout_secs(),
            verify_ssl: default_verify_ssl(),
        }
    }

    /// Read settings from the process environment
    ///
    /// `SONAR_HOST_URL` is required. `SONAR_TIMEOUT` is in seconds and may be
    /// fractional; `SONAR_VERIFY_SSL` accepts true/false, 1/0 and yes/no.
    pub fn from_env() -> SonarQubeResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> SonarQubeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = non_empty(ENV_HOST_URL).ok_or_else(|| {
            SonarQubeError::config(format!("{} is not set", ENV_HOST_URL))
        })?;

        let mut config = Self::new(base_url);
        config.token = non_empty(ENV_TOKEN);
        config.username = non_empty(ENV_LOGIN);
        config.password = lookup(ENV_PASSWORD);

        if let Some(raw) = non_empty(ENV_TIMEOUT) {
            config.timeout_secs = parse_timeout(&raw)?;
        }
        if let Some(raw) = non_empty(ENV_VERIFY_SSL) {
            config.verify_ssl = parse_bool(ENV_VERIFY_SSL, &raw)?;
        }
        Ok(config)
    }

    pub fn timeout(&self) -> SonarQubeResult<Duration> {
        Duration::try_from_secs_f64(self.timeout_secs).map_err(|e| {
            SonarQubeError::config(format!("Invalid timeout {}: {}", self.timeout_secs, e))
        })
    }

    /// Translate into a [`ClientBuilder`] so callers can still add a custom provider
    pub fn builder(&self) -> SonarQubeResult<ClientBuilder> {
        let mut builder = SonarQubeClient::builder(self.base_url.clone())
            .timeout(self.timeout()?)
            .verify_ssl(self.verify_ssl);
        if let Some(token) = &self.token {
            builder = builder.token(token.clone());
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                builder = builder.credentials(username.clone(), password.clone());
            }
            (Some(username), None) => builder = builder.username(username.clone()),
            _ => {}
        }
        Ok(builder)
    }

    pub fn build_client(&self) -> SonarQubeResult<SonarQubeClient> {
        self.builder()?.build()
    }
}

fn parse_timeout(raw: &str) -> SonarQubeResult<f64> {
    let secs: f64 = raw.trim().parse().map_err(|_| {
        SonarQubeError::config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT, raw))
    })?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(SonarQubeError::config(format!(
            "{} must be positive, got '{}'",
            ENV_TIMEOUT, raw
        )));
    }
    Ok(secs)
}

fn parse_bool(name: &str, raw: &str) -> SonarQubeResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SonarQubeError::config(format!(
            "{} must be true or false, got '{}'",
            name, raw
        ))),
    }
}
