//! Error types for the extractor API client

use thiserror::Error;
use tracing::debug;
use vidlore_core::dto::error::ApiErrorBody;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the extractor backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the backend's `detail` string when the body carried one,
    /// otherwise a generic description of the status.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable cause, safe to show to users
        message: String,
    },

    /// A 2xx response whose body did not deserialize to the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Build the error for a non-2xx response, preferring the backend's
    /// `{"detail": ...}` body over a generic status message.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(err) => err.detail,
            Err(_) => {
                debug!("Error response (status {}) had no detail body", status);
                format!("Request failed with status {status}")
            }
        };
        Self::Api { status, message }
    }

    /// Whether this error is the backend saying the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_prefers_server_detail() {
        let err = ClientError::from_status(400, r#"{"detail": "Invalid YouTube URL"}"#);
        assert_eq!(err.to_string(), "Invalid YouTube URL");
    }

    #[test]
    fn test_from_status_falls_back_to_generic_message() {
        let err = ClientError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");

        let err = ClientError::from_status(500, "");
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::from_status(404, r#"{"detail": "Video not found"}"#).is_not_found());
        assert!(!ClientError::from_status(400, "").is_not_found());
    }
}
