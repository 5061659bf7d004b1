//! The transport helper: one authenticated JSON RPC call per invocation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use rigby_core::config::ClientConfigBuilder;
use rigby_core::envelope::{RequestEnvelope, decode_success};
use rigby_core::error::{InvalidInputError, TransportError};
use rigby_core::{BaseUrl, Caller, ClientConfig, Error, Result, RpcPath};

/// HTTP client for the Rigby control API.
///
/// Cloning is cheap and clones share the connection pool. The configuration
/// is fixed at construction, so one client can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct RigbyClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RigbyClient {
    /// Create a client for the default host with the given bearer token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Start building a client for the given bearer token.
    pub fn builder(token: impl Into<String>) -> RigbyClientBuilder {
        RigbyClientBuilder {
            config: ClientConfig::builder(token),
            http: None,
        }
    }

    /// Create a client from an existing configuration.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let http = default_http_client()?;
        Ok(Self { http, config })
    }

    /// Create a client that sends requests through an existing
    /// `reqwest::Client` (for proxies, custom TLS or shared pools).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Returns the client configuration.
    ///
    /// Named so it doesn't shadow the `config` route group.
    pub fn client_config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the API base URL this client is configured for.
    pub fn base_url(&self) -> &BaseUrl {
        self.config.base_url()
    }

    /// POST `{"json": payload}` to `<base>/<path...>` and unwrap the result.
    ///
    /// See [`rigby_core::envelope::decode_success`] for how 2xx bodies are
    /// decoded. Any other status yields [`Error::Api`] with the raw body.
    #[instrument(
        skip(self, path, payload),
        fields(base_url = %self.config.base_url(), path = %join_path(path))
    )]
    pub async fn call<S>(&self, path: &[S], payload: Value) -> Result<Value>
    where
        S: AsRef<str> + Sync,
    {
        if path.is_empty() {
            return Err(Error::invalid_call("RPC path must not be empty"));
        }

        let url = self.config.base_url().rpc_url(path);
        let headers = self.headers()?;
        debug!(%url, "RPC call");

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .timeout(self.config.timeout())
            .json(&RequestEnvelope::new(&payload))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        trace!(status = %status, bytes = body.len(), "RPC response");

        if status.is_success() {
            Ok(decode_success(&body))
        } else {
            debug!(status = status.as_u16(), "RPC call failed");
            Err(Error::api(status.as_u16(), body))
        }
    }

    /// Like [`call`](Self::call), but gives up as soon as `cancel` resolves.
    ///
    /// A cancelled call returns [`Error::Cancelled`]; whatever part of the
    /// exchange was in flight is dropped.
    pub async fn call_with_cancel<S, F>(&self, path: &[S], payload: Value, cancel: F) -> Result<Value>
    where
        S: AsRef<str> + Sync,
        F: Future<Output = ()>,
    {
        if path.is_empty() {
            return Err(Error::invalid_call("RPC path must not be empty"));
        }

        tokio::select! {
            biased;
            _ = cancel => {
                debug!(path = %join_path(path), "RPC call cancelled");
                Err(Error::Cancelled)
            }
            result = self.call(path, payload) => result,
        }
    }

    /// Call an endpoint given as an owned [`RpcPath`].
    pub async fn call_path(&self, path: &RpcPath, payload: Value) -> Result<Value> {
        self.call(path.segments(), payload).await
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.config.token().as_str()))
            .map_err(|_| InvalidInputError::Token {
                reason: "token is not a valid header value".to_string(),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        transport_error(err, self.config.timeout()).into()
    }
}

#[async_trait]
impl Caller for RigbyClient {
    async fn call(&self, path: &[&str], payload: Value) -> Result<Value> {
        RigbyClient::call(self, path, payload).await
    }
}

/// Builder for [`RigbyClient`].
#[derive(Debug)]
pub struct RigbyClientBuilder {
    config: ClientConfigBuilder,
    http: Option<reqwest::Client>,
}

impl RigbyClientBuilder {
    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Send requests through an existing `reqwest::Client`.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<RigbyClient> {
        let config = self.config.build()?;
        match self.http {
            Some(http) => Ok(RigbyClient::with_http_client(config, http)),
            None => RigbyClient::from_config(config),
        }
    }
}

fn default_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("rigby/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            TransportError::Http {
                message: format!("failed to build HTTP client: {}", e),
            }
            .into()
        })
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: timeout.as_millis() as u64,
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

fn join_path<S: AsRef<str>>(path: &[S]) -> String {
    path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = RigbyClient::new("token").unwrap();
        assert_eq!(client.base_url().to_string(), "https://api.rigby.host");
        assert_eq!(client.client_config().timeout(), Duration::from_secs(30));
    }

    #[test]
    fn builder_overrides() {
        let client = RigbyClient::builder("token")
            .base_url("http://localhost:9000")
            .timeout(Duration::from_secs(2))
            .http_client(reqwest::Client::new())
            .build()
            .unwrap();
        assert_eq!(client.base_url().to_string(), "http://localhost:9000");
        assert_eq!(client.client_config().timeout(), Duration::from_secs(2));
    }

    #[test]
    fn builder_accepts_plain_http_on_private_network() {
        let client = RigbyClient::builder("token")
            .base_url("http://10.0.0.5:3000")
            .build()
            .unwrap();
        assert_eq!(client.base_url().to_string(), "http://10.0.0.5:3000");
        assert_eq!(
            client.base_url().rpc_url(&["rpc", "user", "me"]),
            "http://10.0.0.5:3000/rpc/user/me"
        );
    }

    #[test]
    fn builder_rejects_missing_token() {
        assert!(matches!(
            RigbyClient::new(""),
            Err(Error::InvalidInput(InvalidInputError::Token { .. }))
        ));
    }

    #[test]
    fn headers_carry_bearer_token() {
        let client = RigbyClient::new("abc123").unwrap();
        let headers = client.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc123");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn config_route_group_is_reachable() {
        use crate::RouteGroups;

        let client = RigbyClient::new("token").unwrap();
        let group = client.config();
        assert_eq!(format!("{:?}", group), r#"Config { namespace: "config" }"#);
    }

    #[test]
    fn join_path_formats_segments() {
        assert_eq!(join_path(&["rpc", "gdps", "config", "get"]), "rpc/gdps/config/get");
        assert_eq!(join_path::<&str>(&[]), "");
    }

    #[tokio::test]
    async fn empty_path_fails_before_cancel_check() {
        let client = RigbyClient::new("token").unwrap();
        let result = client
            .call_with_cancel::<&str, _>(&[], Value::Null, std::future::ready(()))
            .await;
        assert!(matches!(result, Err(Error::InvalidCall { .. })));
    }
}
