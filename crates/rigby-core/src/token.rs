//! Bearer token type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// The opaque credential sent as `Authorization: Bearer <token>`.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Create a new bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or contains characters that
    /// cannot appear in an HTTP header value.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError::Token {
                reason: "token must not be empty".to_string(),
            }
            .into());
        }
        if !trimmed.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(InvalidInputError::Token {
                reason: "token must be visible ASCII without whitespace".to_string(),
            }
            .into());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a display-safe form showing only the last four characters.
    pub fn redacted(&self) -> String {
        // tokens are ASCII, so byte slicing is safe
        if self.0.len() <= 8 {
            "****".to_string()
        } else {
            format!("****{}", &self.0[self.0.len() - 4..])
        }
    }
}

// Hide token value in Debug output
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let token = BearerToken::new("secret-token-value").unwrap();
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let token = BearerToken::new("  abc123\n").unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn rejects_empty_and_non_header_tokens() {
        assert!(BearerToken::new("").is_err());
        assert!(BearerToken::new("   ").is_err());
        assert!(BearerToken::new("has space").is_err());
        assert!(BearerToken::new("tök").is_err());
    }

    #[test]
    fn redacted_shows_tail_only() {
        let token = BearerToken::new("rgb_0123456789abcd").unwrap();
        assert_eq!(token.redacted(), "****abcd");
        let short = BearerToken::new("short").unwrap();
        assert_eq!(short.redacted(), "****");
    }
}
