//! Error types for the Open-Meteo client

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Open-Meteo APIs
#[derive(Debug, Error)]
pub enum Error {
    /// Request parameters were rejected before any HTTP request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The API answered with a non-success status code
    #[error("API error: HTTP {status}")]
    Api {
        /// HTTP status code returned by the API
        status: StatusCode,
        /// Raw response body as returned by the API
        body: String,
    },

    /// The request produced no usable response (connect failure, timeout)
    #[error("No response received: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its body could not be decoded as JSON
    #[error("Parse error: {0}")]
    Decode(String),
}

impl Error {
    /// Build a validation error from any message
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code, if the API answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable reason extracted from an API error body
    ///
    /// Open-Meteo error bodies carry a `reason` field; some deployments
    /// use `error` instead. Returns `None` when the body is not JSON or
    /// carries neither field.
    #[must_use]
    pub fn api_reason(&self) -> Option<String> {
        let Self::Api { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("reason")
            .or_else(|| value.get("error"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    }

    /// Returns true if the API rejected the request for rate limiting
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS)
    }

    /// Returns true if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Validation(_) | Self::Decode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        let err = Error::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        assert!(err.is_retryable());

        let err = Error::Api {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: String::new(),
        };
        assert!(err.is_retryable());
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!Error::validation("bad latitude").is_retryable());
        assert!(!Error::Decode("not json".to_string()).is_retryable());

        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            body: String::new(),
        };
        assert!(!err.is_retryable());
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_status_accessor() {
        let err = Error::Api {
            status: StatusCode::NOT_FOUND,
            body: "missing".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(Error::validation("x").status(), None);
    }

    #[test]
    fn test_api_reason_from_reason_field() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"error":true,"reason":"Latitude must be in range"}"#.to_string(),
        };
        assert_eq!(err.api_reason().as_deref(), Some("Latitude must be in range"));
    }

    #[test]
    fn test_api_reason_falls_back_to_error_field() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"error":"unknown parameter"}"#.to_string(),
        };
        assert_eq!(err.api_reason().as_deref(), Some("unknown parameter"));
    }

    #[test]
    fn test_api_reason_non_json_body() {
        let err = Error::Api {
            status: StatusCode::BAD_GATEWAY,
            body: "<html>502</html>".to_string(),
        };
        assert_eq!(err.api_reason(), None);
        assert_eq!(Error::Decode("x".to_string()).api_reason(), None);
    }

    #[test]
    fn test_error_display() {
        let err = Error::validation("latitude out of range");
        assert!(err.to_string().contains("latitude out of range"));

        let err = Error::Api {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        };
        assert!(err.to_string().contains("404"));
    }
}
