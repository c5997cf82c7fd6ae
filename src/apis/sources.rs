use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{ScmResponse, SourcesResponse},
    params::Params,
};
use log::debug;
use reqwest::Method;
use std::sync::Arc;

/// Sources API operations (`/api/sources`)
#[derive(Debug)]
pub struct SourcesApi {
    transport: Arc<Transport>,
}

impl SourcesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Plain source code of a file
    pub async fn raw(
        &self,
        key: &str,
        branch: Option<&str>,
        pull_request: Option<&str>,
    ) -> SonarQubeResult<String> {
        debug!("Getting raw source of {}", key);
        let params = Params::new()
            .with("key", key)
            .with("branch", branch)
            .with("pullRequest", pull_request);
        self.transport
            .request_text(Method::GET, "/api/sources/raw", Some(&params))
            .await
    }

    /// Source lines with SCM and duplication data
    ///
    /// # Arguments
    /// * `key` - File key
    /// * `from` - First line (1-based)
    /// * `to` - Last line, inclusive
    pub async fn lines(
        &self,
        key: &str,
        branch: Option<&str>,
        from: Option<u32>,
        pull_request: Option<&str>,
        to: Option<u32>,
    ) -> SonarQubeResult<SourcesResponse> {
        debug!("Getting source lines of {}", key);
        let params = Params::new()
            .with("key", key)
            .with("branch", branch)
            .with("from", from)
            .with("pullRequest", pull_request)
            .with("to", to);
        self.transport.get_model("/api/sources/lines", &params).await
    }

    pub async fn scm(
        &self,
        key: &str,
        commits_by_line: Option<bool>,
        from: Option<u32>,
        to: Option<u32>,
    ) -> SonarQubeResult<ScmResponse> {
        debug!("Getting SCM data of {}", key);
        let params = Params::new()
            .with("key", key)
            .with("commits_by_line", commits_by_line)
            .with("from", from)
            .with("to", to);
        self.transport.get_model("/api/sources/scm", &params).await
    }
}
