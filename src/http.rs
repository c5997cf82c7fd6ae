//! Authenticated HTTP transport shared by every API namespace.
//!
//! One [`Transport`] owns the underlying `reqwest` session. Each call is a
//! single round-trip: absent parameters are dropped, the request is sent,
//! and the response is turned into JSON, raw text, or a typed error.

use crate::{
    auth::Authentication,
    error::{SonarQubeError, SonarQubeResult},
    models::ErrorResponse,
    params::Params,
};
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use url::Url;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const UNKNOWN_ERROR: &str = "Unknown error";

/// HTTP transport for the SonarQube Web API
#[derive(Debug)]
pub struct Transport {
    client: RwLock<Option<Client>>,
    base_url: String,
    timeout: Duration,
}

impl Transport {
    /// Build a transport with a persistent session.
    ///
    /// # Arguments
    /// * `base_url` - Server root, e.g. "https://sonarqube.example.com"
    /// * `auth` - Optional credentials merged into the default headers
    /// * `timeout` - Upper bound for every request
    /// * `verify_ssl` - Whether TLS certificates are checked
    pub fn new(
        base_url: &str,
        auth: Option<&dyn Authentication>,
        timeout: Duration,
        verify_ssl: bool,
    ) -> SonarQubeResult<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        if let Some(auth) = auth {
            headers.extend(auth.auth_headers()?);
        }

        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            .timeout(timeout)
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
            .map_err(|e| SonarQubeError::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            "Created transport for {} (timeout={:?}, verify_ssl={})",
            base_url, timeout, verify_ssl
        );

        Ok(Self {
            client: RwLock::new(Some(client)),
            base_url,
            timeout,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Release the underlying session. Safe to call more than once.
    pub fn close(&self) {
        let mut guard = self.client.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            debug!("Closed HTTP session for {}", self.base_url);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// A 204 response or a success body that is not JSON yields an empty
    /// object.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        data: Option<&Params>,
    ) -> SonarQubeResult<Value> {
        let response = self.send(method, path, params, data).await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(empty_result());
        }

        let body = self.read_body(response).await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body).unwrap_or_else(|_| empty_result()))
        } else {
            Err(classify_error(status, &body))
        }
    }

    /// Send a request and return the raw response text.
    ///
    /// Used by endpoints that answer with plain text or XML.
    pub async fn request_text(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
    ) -> SonarQubeResult<String> {
        let response = self.send(method, path, params, None).await?;
        let status = response.status();
        let body = self.read_body(response).await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(classify_error(status, &body))
        }
    }

    /// Send a request and decode the JSON body into `T`.
    pub async fn request_model<T>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        data: Option<&Params>,
    ) -> SonarQubeResult<T>
    where
        T: DeserializeOwned,
    {
        let value = self.request(method, path, params, data).await?;
        decode(value)
    }

    pub async fn get(&self, path: &str, params: &Params) -> SonarQubeResult<Value> {
        self.request(Method::GET, path, Some(params), None).await
    }

    pub async fn post(&self, path: &str, data: &Params) -> SonarQubeResult<Value> {
        self.request(Method::POST, path, None, Some(data)).await
    }

    pub async fn get_model<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> SonarQubeResult<T> {
        self.request_model(Method::GET, path, Some(params), None).await
    }

    pub async fn post_model<T: DeserializeOwned>(
        &self,
        path: &str,
        data: &Params,
    ) -> SonarQubeResult<T> {
        self.request_model(Method::POST, path, None, Some(data)).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        data: Option<&Params>,
    ) -> SonarQubeResult<Response> {
        let client = self.session()?;
        let url = format!("{}{}", self.base_url, path);

        let query = params.map(Params::present).unwrap_or_default();
        let form = data.map(Params::present).unwrap_or_default();
        // Form values may hold passwords; only their keys are logged.
        let form_keys: Vec<&str> = form.iter().map(|(k, _)| *k).collect();
        debug!("Request: {} {} params={:?} data={:?}", method, path, query, form_keys);

        let mut request = client.request(method, &url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        if !form.is_empty() {
            request = request.form(&form);
        }

        let response = request.send().await.map_err(|e| self.connection_error(e))?;
        debug!("Response: {} -> {}", path, response.status());
        Ok(response)
    }

    async fn read_body(&self, response: Response) -> SonarQubeResult<String> {
        response.text().await.map_err(|e| self.connection_error(e))
    }

    fn session(&self) -> SonarQubeResult<Client> {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| {
                SonarQubeError::connection(
                    format!("HTTP client for {} is closed", self.base_url),
                    None,
                )
            })
    }

    fn connection_error(&self, err: reqwest::Error) -> SonarQubeError {
        let message = if err.is_timeout() {
            format!("Request timed out after {}s", self.timeout.as_secs_f64())
        } else if err.is_connect() {
            format!("Failed to connect to {}", self.base_url)
        } else {
            "HTTP error occurred".to_string()
        };
        SonarQubeError::connection(message, Some(err))
    }
}

fn normalize_base_url(base_url: &str) -> SonarQubeResult<String> {
    let trimmed = base_url.trim_end_matches('/');
    Url::parse(trimmed)
        .map_err(|e| SonarQubeError::config(format!("Invalid base URL '{}': {}", base_url, e)))?;
    Ok(trimmed.to_string())
}

fn empty_result() -> Value {
    Value::Object(Map::new())
}

/// Decode a JSON payload into a typed structure.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> SonarQubeResult<T> {
    serde_json::from_value(value).map_err(|e| SonarQubeError::InvalidResponse {
        message: format!("{}: {}", std::any::type_name::<T>(), e),
        source: e,
    })
}

/// Map a non-2xx response onto the error taxonomy.
///
/// The first `errors[].msg` becomes the message; a body that is not JSON is
/// used verbatim.
pub(crate) fn classify_error(status: StatusCode, body: &str) -> SonarQubeError {
    let (message, errors, details) = match serde_json::from_str::<Value>(body) {
        Ok(details) => {
            let errors = ErrorResponse::deserialize(&details)
                .map(|payload| payload.errors)
                .unwrap_or_default();
            let message = errors
                .first()
                .map(|e| e.msg.as_str())
                .filter(|msg| !msg.is_empty())
                .unwrap_or(UNKNOWN_ERROR)
                .to_string();
            (message, errors, Some(details))
        }
        Err(_) => {
            let message = if body.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                body.to_string()
            };
            (message, Vec::new(), None)
        }
    };

    warn!("SonarQube API error {}: {}", status.as_u16(), message);
    SonarQubeError::from_status(status.as_u16(), message, errors, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://sonarqube.example.com/").unwrap(),
            "https://sonarqube.example.com"
        );
        assert_eq!(
            normalize_base_url("https://example.com/sonar//").unwrap(),
            "https://example.com/sonar"
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let err = normalize_base_url("not a url").unwrap_err();
        assert!(matches!(err, SonarQubeError::Config(_)));
    }

    #[test]
    fn test_classify_uses_first_message() {
        let body = r#"{"errors":[{"msg":"first"},{"msg":"second"}]}"#;
        let err = classify_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.message(), "first");
        assert_eq!(err.errors().len(), 2);
        assert!(err.details().is_some());
    }

    #[test]
    fn test_classify_raw_text_fallback() {
        let err = classify_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.message(), "upstream down");
        assert_eq!(err.status_code(), Some(502));
        assert!(err.details().is_none());
    }

    #[test]
    fn test_classify_unknown_error() {
        let err = classify_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.message(), "Unknown error");

        let err = classify_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"other":1}"#);
        assert_eq!(err.message(), "Unknown error");
        assert!(err.errors().is_empty());
    }

    #[test]
    fn test_classify_malformed_errors_list() {
        let err = classify_error(StatusCode::NOT_FOUND, r#"{"errors":"nope"}"#);
        assert!(matches!(err, SonarQubeError::NotFound { .. }));
        assert_eq!(err.message(), "Unknown error");
        assert!(err.errors().is_empty());
        assert!(err.details().is_some());

        let err = classify_error(StatusCode::BAD_REQUEST, r#"{"errors":[{"code":1}]}"#);
        assert_eq!(err.message(), "Unknown error");
        assert_eq!(err.errors().len(), 1);
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_decode_missing_field() {
        let err = decode::<Named>(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, SonarQubeError::InvalidResponse { .. }));

        let ok = decode::<Named>(serde_json::json!({"name": "x", "extra": 1})).unwrap();
        assert_eq!(ok.name, "x");
    }
}
