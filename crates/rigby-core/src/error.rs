//! Error types for the Rigby client.
//!
//! This module provides a unified error type with explicit variants for
//! local call errors, API errors, transport failures, cancellation and
//! input validation.

use thiserror::Error;

/// The unified error type for Rigby client operations.
///
/// Every variant propagates straight to the caller of `call`; nothing in the
/// client retries or suppresses an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The call was rejected locally before any network request was made.
    #[error("invalid call: {message}")]
    InvalidCall { message: String },

    /// The API answered with a status outside 2xx.
    #[error("API error: HTTP {status}{}", body_suffix(.body))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, exactly as received.
        body: String,
    },

    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The caller's cancellation signal fired before the exchange completed.
    #[error("request cancelled")]
    Cancelled,

    /// Input validation errors (base URL, token).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl Error {
    /// Create an invalid-call error.
    pub fn invalid_call(message: impl Into<String>) -> Self {
        Error::InvalidCall {
            message: message.into(),
        }
    }

    /// Create an API error from a status code and raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Error::Api {
            status,
            body: body.into(),
        }
    }

    /// Human-readable message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status code, present only for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, present only for API errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if the API rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns true if the exchange timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Timeout { .. }))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid bearer token. The token itself is never included.
    #[error("invalid bearer token: {reason}")]
    Token { reason: String },

    /// Invalid RPC path.
    #[error("invalid RPC path '{value}': {reason}")]
    Path { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status_and_raw_body() {
        let err = Error::api(404, r#"{"error":"missing"}"#);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some(r#"{"error":"missing"}"#));
        assert_eq!(err.message(), r#"API error: HTTP 404: {"error":"missing"}"#);
    }

    #[test]
    fn api_error_without_body() {
        let err = Error::api(502, "  ");
        assert_eq!(err.to_string(), "API error: HTTP 502");
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = Error::invalid_call("path must not be empty");
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
        assert_eq!(err.to_string(), "invalid call: path must not be empty");

        assert_eq!(Error::Cancelled.status(), None);
    }

    #[test]
    fn unauthorized_detection() {
        assert!(Error::api(401, "").is_unauthorized());
        assert!(Error::api(403, "").is_unauthorized());
        assert!(!Error::api(500, "").is_unauthorized());
        assert!(!Error::Cancelled.is_unauthorized());
    }

    #[test]
    fn timeout_detection() {
        let err = Error::from(TransportError::Timeout { duration_ms: 1500 });
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "transport error: request timed out after 1500ms"
        );
    }
}
