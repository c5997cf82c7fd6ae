use serde_json::Value;
use thiserror::Error;

use crate::models::ErrorMessage;

/// SonarQube client error types
///
/// Every HTTP-level failure carries the status code, the message extracted
/// from the server's `errors` payload, the full sub-error list and the raw
/// response body when it was JSON.
#[derive(Error, Debug)]
pub enum SonarQubeError {
    /// The request never produced an HTTP response (DNS, refused connection,
    /// timeout, or any other transport fault).
    #[error("{}", with_details(.message, .details.as_deref()))]
    Connection {
        message: String,
        details: Option<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// HTTP 401
    #[error("{}", api_display(401, .message, &[]))]
    Authentication {
        message: String,
        details: Option<Value>,
    },

    /// HTTP 403
    #[error("{}", api_display(403, .message, &[]))]
    Permission {
        message: String,
        details: Option<Value>,
    },

    /// HTTP 404
    #[error("{}", api_display(404, .message, &[]))]
    NotFound {
        message: String,
        details: Option<Value>,
    },

    /// HTTP 400
    #[error("{}", api_display(400, .message, .errors))]
    Validation {
        message: String,
        errors: Vec<ErrorMessage>,
        details: Option<Value>,
    },

    /// Any other non-2xx status
    #[error("{}", api_display(*.status, .message, .errors))]
    Api {
        status: u16,
        message: String,
        errors: Vec<ErrorMessage>,
        details: Option<Value>,
    },

    /// Invalid client construction (empty token, username without password, bad URL)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A successful response did not match the expected structure
    #[error("Invalid response format: {message}")]
    InvalidResponse {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for SonarQube operations
pub type SonarQubeResult<T> = Result<T, SonarQubeError>;

fn with_details(message: &str, details: Option<&str>) -> String {
    match details {
        Some(details) if !details.is_empty() => format!("{}: {}", message, details),
        _ => message.to_string(),
    }
}

fn api_display(status: u16, message: &str, errors: &[ErrorMessage]) -> String {
    let mut out = format!("[{}] {}", status, message);
    if !errors.is_empty() {
        let joined: Vec<&str> = errors.iter().map(|e| e.msg.as_str()).collect();
        out.push_str(": ");
        out.push_str(&joined.join("; "));
    }
    out
}

impl SonarQubeError {
    /// Build the error matching an HTTP status code.
    pub fn from_status(
        status: u16,
        message: impl Into<String>,
        errors: Vec<ErrorMessage>,
        details: Option<Value>,
    ) -> Self {
        let message = message.into();
        match status {
            400 => Self::Validation {
                message,
                errors,
                details,
            },
            401 => Self::Authentication { message, details },
            403 => Self::Permission { message, details },
            404 => Self::NotFound { message, details },
            _ => Self::Api {
                status,
                message,
                errors,
                details,
            },
        }
    }

    /// Create a connection error
    pub fn connection(
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        let details = source.as_ref().map(|e| e.to_string());
        Self::Connection {
            message: message.into(),
            details,
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Human-readable message without the status prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message, .. }
            | Self::Authentication { message, .. }
            | Self::Permission { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::Api { message, .. }
            | Self::InvalidResponse { message, .. } => message.as_str(),
            Self::Config(message) => message.as_str(),
        }
    }

    /// HTTP status code, for errors that came from a server response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::Permission { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(400),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-reported sub-errors.
    pub fn errors(&self) -> &[ErrorMessage] {
        match self {
            Self::Validation { errors, .. } | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Raw JSON payload of a failed response, when one was parseable.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Authentication { details, .. }
            | Self::Permission { details, .. }
            | Self::NotFound { details, .. }
            | Self::Validation { details, .. }
            | Self::Api { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// True for every error produced from a non-2xx HTTP response.
    pub fn is_api_error(&self) -> bool {
        self.status_code().is_some()
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str) -> ErrorMessage {
        ErrorMessage {
            msg: text.to_string(),
        }
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (400, 400),
            (401, 401),
            (403, 403),
            (404, 404),
            (409, 409),
            (500, 500),
        ];
        for (status, expected) in cases {
            let err = SonarQubeError::from_status(status, "X", vec![msg("X")], None);
            assert_eq!(err.status_code(), Some(expected));
            assert_eq!(err.message(), "X");
            assert!(err.is_api_error());
        }

        assert!(matches!(
            SonarQubeError::from_status(401, "X", vec![], None),
            SonarQubeError::Authentication { .. }
        ));
        assert!(matches!(
            SonarQubeError::from_status(403, "X", vec![], None),
            SonarQubeError::Permission { .. }
        ));
        assert!(matches!(
            SonarQubeError::from_status(404, "X", vec![], None),
            SonarQubeError::NotFound { .. }
        ));
        assert!(matches!(
            SonarQubeError::from_status(502, "X", vec![], None),
            SonarQubeError::Api { status: 502, .. }
        ));
    }

    #[test]
    fn test_validation_keeps_all_sub_errors() {
        let err = SonarQubeError::from_status(
            400,
            "first",
            vec![msg("first"), msg("second")],
            None,
        );
        assert_eq!(err.message(), "first");
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.to_string(), "[400] first: first; second");
    }

    #[test]
    fn test_api_error_display() {
        let err = SonarQubeError::from_status(500, "Internal error", vec![], None);
        assert_eq!(err.to_string(), "[500] Internal error");

        let err = SonarQubeError::from_status(404, "Component not found", vec![], None);
        assert_eq!(err.to_string(), "[404] Component not found");
    }

    #[test]
    fn test_connection_error_display() {
        let err = SonarQubeError::connection("Failed to connect to http://localhost:9000", None);
        assert_eq!(err.to_string(), "Failed to connect to http://localhost:9000");
        assert!(err.is_connection_error());
        assert!(!err.is_api_error());
        assert_eq!(err.status_code(), None);
        assert!(err.errors().is_empty());
    }

    #[test]
    fn test_config_error() {
        let err = SonarQubeError::config("Token cannot be empty");
        assert_eq!(err.message(), "Token cannot be empty");
        assert_eq!(err.to_string(), "Invalid configuration: Token cannot be empty");
        assert!(err.details().is_none());
    }
}
