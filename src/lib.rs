/*
 * SonarQube Client - typed async bindings for the SonarQube Web API
 */

// Internal modules
mod auth;
mod client;
mod config;
mod error;
mod http;
mod params;

pub mod apis;
pub mod models;

// Re-export public types and interfaces
pub use apis::*;
pub use auth::{create_auth, Authentication, BasicAuth, TokenAuth};
pub use client::{ClientBuilder, SonarQubeClient};
pub use config::ClientConfig;
pub use error::{SonarQubeError, SonarQubeResult};
pub use http::{Transport, DEFAULT_TIMEOUT};
pub use params::{ParamValue, Params};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClientBuilder, ClientConfig, SonarQubeClient, SonarQubeError, SonarQubeResult,
        BasicAuth, TokenAuth,
        // Common model types
        models::{
            Issue, IssueSearchRequest, Paging, ProjectCreateRequest, ProjectSearchRequest,
            Rule, Visibility,
        },
    };
}
