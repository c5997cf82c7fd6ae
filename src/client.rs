use crate::{
    apis::{
        ApplicationsApi, ComponentsApi, HotspotsApi, IssuesApi, MeasuresApi, ProjectsApi,
        QualityGatesApi, QualityProfilesApi, RulesApi, SettingsApi, SourcesApi, SystemApi,
        UserTokensApi, UsersApi,
    },
    auth::{create_auth, Authentication},
    error::SonarQubeResult,
    http::{Transport, DEFAULT_TIMEOUT},
};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Main SonarQube client
///
/// Owns a single [`Transport`]. Namespace accessors are created on first use
/// and the same instance is returned for the lifetime of the client.
#[derive(Debug)]
pub struct SonarQubeClient {
    transport: Arc<Transport>,
    applications: OnceLock<ApplicationsApi>,
    components: OnceLock<ComponentsApi>,
    hotspots: OnceLock<HotspotsApi>,
    issues: OnceLock<IssuesApi>,
    measures: OnceLock<MeasuresApi>,
    projects: OnceLock<ProjectsApi>,
    qualitygates: OnceLock<QualityGatesApi>,
    qualityprofiles: OnceLock<QualityProfilesApi>,
    rules: OnceLock<RulesApi>,
    settings: OnceLock<SettingsApi>,
    sources: OnceLock<SourcesApi>,
    system: OnceLock<SystemApi>,
    users: OnceLock<UsersApi>,
    user_tokens: OnceLock<UserTokensApi>,
}

impl SonarQubeClient {
    /// Start configuring a client for `base_url`
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Create a client with a custom authentication provider
    pub fn with_auth(
        base_url: impl Into<String>,
        auth: impl Authentication + 'static,
    ) -> SonarQubeResult<Self> {
        Self::builder(base_url).auth(auth).build()
    }

    /// Create a client without credentials
    pub fn anonymous(base_url: impl Into<String>) -> SonarQubeResult<Self> {
        Self::builder(base_url).build()
    }

    fn from_transport(transport: Transport) -> Self {
        Self {
            transport: Arc::new(transport),
            applications: OnceLock::new(),
            components: OnceLock::new(),
            hotspots: OnceLock::new(),
            issues: OnceLock::new(),
            measures: OnceLock::new(),
            projects: OnceLock::new(),
            qualitygates: OnceLock::new(),
            qualityprofiles: OnceLock::new(),
            rules: OnceLock::new(),
            settings: OnceLock::new(),
            sources: OnceLock::new(),
            system: OnceLock::new(),
            users: OnceLock::new(),
            user_tokens: OnceLock::new(),
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Underlying transport, for endpoints without a typed wrapper
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Release the HTTP session. Further calls fail with a connection error.
    pub fn close(&self) {
        self.transport.close();
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_closed()
    }

    /// Get Applications API
    pub fn applications(&self) -> &ApplicationsApi {
        self.applications
            .get_or_init(|| ApplicationsApi::new(Arc::clone(&self.transport)))
    }

    /// Get Components API
    pub fn components(&self) -> &ComponentsApi {
        self.components
            .get_or_init(|| ComponentsApi::new(Arc::clone(&self.transport)))
    }

    /// Get Hotspots API
    pub fn hotspots(&self) -> &HotspotsApi {
        self.hotspots
            .get_or_init(|| HotspotsApi::new(Arc::clone(&self.transport)))
    }

    /// Get Issues API
    pub fn issues(&self) -> &IssuesApi {
        self.issues
            .get_or_init(|| IssuesApi::new(Arc::clone(&self.transport)))
    }

    /// Get Measures API
    pub fn measures(&self) -> &MeasuresApi {
        self.measures
            .get_or_init(|| MeasuresApi::new(Arc::clone(&self.transport)))
    }

    /// Get Projects API
    pub fn projects(&self) -> &ProjectsApi {
        self.projects
            .get_or_init(|| ProjectsApi::new(Arc::clone(&self.transport)))
    }

    /// Get Quality Gates API
    pub fn qualitygates(&self) -> &QualityGatesApi {
        self.qualitygates
            .get_or_init(|| QualityGatesApi::new(Arc::clone(&self.transport)))
    }

    /// Get Quality Profiles API
    pub fn qualityprofiles(&self) -> &QualityProfilesApi {
        self.qualityprofiles
            .get_or_init(|| QualityProfilesApi::new(Arc::clone(&self.transport)))
    }

    /// Get Rules API
    pub fn rules(&self) -> &RulesApi {
        self.rules
            .get_or_init(|| RulesApi::new(Arc::clone(&self.transport)))
    }

    /// Get Settings API
    pub fn settings(&self) -> &SettingsApi {
        self.settings
            .get_or_init(|| SettingsApi::new(Arc::clone(&self.transport)))
    }

    /// Get Sources API
    pub fn sources(&self) -> &SourcesApi {
        self.sources
            .get_or_init(|| SourcesApi::new(Arc::clone(&self.transport)))
    }

    /// Get System API
    pub fn system(&self) -> &SystemApi {
        self.system
            .get_or_init(|| SystemApi::new(Arc::clone(&self.transport)))
    }

    /// Get Users API
    pub fn users(&self) -> &UsersApi {
        self.users
            .get_or_init(|| UsersApi::new(Arc::clone(&self.transport)))
    }

    /// Get User Tokens API
    pub fn user_tokens(&self) -> &UserTokensApi {
        self.user_tokens
            .get_or_init(|| UserTokensApi::new(Arc::clone(&self.transport)))
    }
}

impl Drop for SonarQubeClient {
    fn drop(&mut self) {
        self.transport.close();
    }
}

/// Builder for [`SonarQubeClient`]
///
/// Credentials resolve in this order: custom provider, token,
/// username/password, anonymous.
pub struct ClientBuilder {
    base_url: String,
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
    auth: Option<Box<dyn Authentication>>,
    timeout: Duration,
    verify_ssl: bool,
}

impl ClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            username: None,
            password: None,
            auth: None,
            timeout: DEFAULT_TIMEOUT,
            verify_ssl: true,
        }
    }

    /// Authenticate with a user token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Authenticate with login and password
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Only a username; `build` fails unless a token or password is also given.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Use a custom authentication provider
    pub fn auth(mut self, auth: impl Authentication + 'static) -> Self {
        self.auth = Some(Box::new(auth));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disable to accept self-signed certificates
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    pub fn build(self) -> SonarQubeResult<SonarQubeClient> {
        let auth = match self.auth {
            Some(auth) => Some(auth),
            None => create_auth(
                self.token.as_deref(),
                self.username.as_deref(),
                self.password.as_deref(),
            )?,
        };
        let transport = Transport::new(
            &self.base_url,
            auth.as_deref(),
            self.timeout,
            self.verify_ssl,
        )?;
        Ok(SonarQubeClient::from_transport(transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SonarQubeError;

    #[test]
    fn test_accessors_are_cached() {
        let client = SonarQubeClient::anonymous("http://localhost:9000").unwrap();
        assert!(std::ptr::eq(client.projects(), client.projects()));
        assert!(std::ptr::eq(client.issues(), client.issues()));
        assert!(std::ptr::eq(client.user_tokens(), client.user_tokens()));
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = SonarQubeClient::anonymous("http://localhost:9000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_username_without_password_fails() {
        let err = SonarQubeClient::builder("http://localhost:9000")
            .username("admin")
            .build()
            .unwrap_err();
        assert!(matches!(err, SonarQubeError::Config(_)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let client = SonarQubeClient::builder("http://localhost:9000")
            .token("squ_test")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert!(!client.is_closed());
        client.close();
        client.close();
        assert!(client.is_closed());
        assert_eq!(client.transport().timeout(), Duration::from_secs(5));
    }
}
