//! Error types for Heroku API operations.
//!
//! Errors are grouped by the stage of a call that produced them: building
//! the request, encoding its body, the transport round trip, and decoding
//! the response. None of them are retried or swallowed by the dispatcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Heroku API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The request could not be constructed (bad URL, method or header).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A structured request body failed JSON serialization.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// The HTTP transport failed (connect, DNS, TLS, protocol).
    #[error("HTTP transport failed: {0}")]
    Transport(String),

    /// The transport gave up waiting for the remote side.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The response body did not decode into the requested target.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// Writing the response body into a caller supplied sink failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The platform answered with a non-success status.
    ///
    /// Only produced when the dispatcher runs with
    /// [`StatusPolicy::Strict`](crate::config::StatusPolicy::Strict).
    #[error("API error {status} ({id}): {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Machine readable error id reported by the platform
        id: String,
        /// Human readable message reported by the platform
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized result type for Heroku API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error payload returned by the platform for failed requests.
///
/// ```json
/// { "id": "not_found", "message": "Couldn't find that app." }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Machine readable error id
    #[serde(default)]
    pub id: String,
    /// Human readable error message
    #[serde(default)]
    pub message: String,
    /// Link to documentation about the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true if the error was raised before any network I/O happened.
    #[must_use]
    pub const fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_) | Self::Encode(_) | Self::Config(_)
        )
    }

    /// Returns the HTTP status for [`Error::Api`], if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_api_body(status: u16, raw: &[u8]) -> Self {
        let body: ApiErrorBody = serde_json::from_slice(raw).unwrap_or_else(|_| ApiErrorBody {
            message: String::from_utf8_lossy(raw).into_owned(),
            ..ApiErrorBody::default()
        });
        Self::Api {
            status,
            id: body.id,
            message: body.message,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::InvalidRequest("test".to_string()).error_code(),
            "INVALID_REQUEST"
        );
        assert_eq!(Error::Encode("test".to_string()).error_code(), "ENCODE_ERROR");
        assert_eq!(
            Error::Transport("test".to_string()).error_code(),
            "TRANSPORT_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(Error::Decode("test".to_string()).error_code(), "DECODE_ERROR");
        assert_eq!(Error::Io("test".to_string()).error_code(), "IO_ERROR");
        assert_eq!(
            Error::Api {
                status: 404,
                id: "not_found".to_string(),
                message: "missing".to_string()
            }
            .error_code(),
            "API_ERROR"
        );
        assert_eq!(Error::Config("test".to_string()).error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Decode("expected value at line 1 column 1".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to decode response body: expected value at line 1 column 1"
        );

        let err = Error::Api {
            status: 404,
            id: "not_found".to_string(),
            message: "Couldn't find that app.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error 404 (not_found): Couldn't find that app."
        );
    }

    #[test]
    fn test_pre_flight_classification() {
        assert!(Error::InvalidRequest("bad".to_string()).is_pre_flight());
        assert!(Error::Encode("bad".to_string()).is_pre_flight());
        assert!(!Error::Transport("refused".to_string()).is_pre_flight());
        assert!(!Error::Decode("eof".to_string()).is_pre_flight());
    }

    #[test]
    fn test_from_api_body_structured() {
        let err = Error::from_api_body(
            403,
            br#"{"id":"forbidden","message":"You do not have access."}"#,
        );
        assert_eq!(err.status(), Some(403));
        assert_eq!(
            err,
            Error::Api {
                status: 403,
                id: "forbidden".to_string(),
                message: "You do not have access.".to_string(),
            }
        );
    }

    #[test]
    fn test_from_api_body_unstructured() {
        let err = Error::from_api_body(502, b"Bad Gateway");
        assert_eq!(
            err,
            Error::Api {
                status: 502,
                id: String::new(),
                message: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let heroku_err: Error = err.into();
        assert!(matches!(heroku_err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_from_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed");
        let heroku_err: Error = err.into();
        assert_eq!(heroku_err, Error::Io("sink closed".to_string()));
    }

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(Error::Timeout("slow".to_string()).status(), None);
    }
}
