//! Client configuration.

use std::time::Duration;

use crate::error::Error;
use crate::token::BearerToken;
use crate::types::BaseUrl;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.rigby.host";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a Rigby client.
///
/// Immutable once built. Defaults are filled in by the builder at
/// construction time.
///
/// ```
/// use std::time::Duration;
/// use rigby_core::ClientConfig;
///
/// let config = ClientConfig::builder("my-token")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// assert_eq!(config.base_url().to_string(), "https://api.rigby.host");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    timeout: Duration,
    token: BearerToken,
}

impl ClientConfig {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::builder(token).build()
    }

    /// Start building a configuration for the given token.
    pub fn builder(token: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            token: token.into(),
            base_url: None,
            timeout: None,
        }
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the bearer token.
    pub fn token(&self) -> &BearerToken {
        &self.token
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    token: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or base URL is invalid.
    pub fn build(self) -> Result<ClientConfig, Error> {
        let token = BearerToken::new(self.token)?;
        let base_url = match self.base_url {
            Some(url) => BaseUrl::new(url)?,
            None => BaseUrl::default(),
        };

        Ok(ClientConfig {
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            token,
        })
    }
}
