//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for the Rigby API.
///
/// Any absolute `http` or `https` URL with a host is accepted, so
/// self-hosted, LAN and proxied deployments work as well as the public host.
///
/// # Example
///
/// ```
/// use rigby_core::BaseUrl;
///
/// let base = BaseUrl::new("https://api.rigby.host").unwrap();
/// assert_eq!(base.rpc_url(&["rpc", "gdps", "config", "get"]),
///            "https://api.rigby.host/rpc/gdps/config/get");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::BaseUrl {
                value: s.to_string(),
                reason: "must not have a query or fragment".to_string(),
            }
            .into());
        }

        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the endpoint URL for a sequence of path segments.
    ///
    /// Segments are joined with `/` and appended to the base URL as given.
    pub fn rpc_url<S: AsRef<str>>(&self, segments: &[S]) -> String {
        // Url keeps a trailing slash on root paths
        let mut url = self.0.as_str().trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.push_str(segment.as_ref());
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true if requests to this URL are TLS-protected.
    pub fn is_secure(&self) -> bool {
        self.0.scheme() == "https"
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "https" && scheme != "http" {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Url::parse(crate::config::DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://api.rigby.host").unwrap();
        assert_eq!(base.host(), Some("api.rigby.host"));
        assert!(base.is_secure());
    }

    #[test]
    fn valid_localhost_http() {
        let base = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(base.host(), Some("127.0.0.1"));
        assert!(!base.is_secure());
    }

    #[test]
    fn rpc_url_construction() {
        let base = BaseUrl::new("https://api.rigby.host").unwrap();
        assert_eq!(
            base.rpc_url(&["rpc", "gdps", "levels", "get"]),
            "https://api.rigby.host/rpc/gdps/levels/get"
        );
    }

    #[test]
    fn rpc_url_ignores_trailing_slash() {
        let base = BaseUrl::new("https://api.rigby.host/").unwrap();
        assert_eq!(
            base.rpc_url(&["rpc", "user", "me"]),
            "https://api.rigby.host/rpc/user/me"
        );
    }

    #[test]
    fn rpc_url_keeps_base_path_prefix() {
        let base = BaseUrl::new("https://proxy.example.com/rigby/").unwrap();
        assert_eq!(
            base.rpc_url(&["rpc", "user", "me"]),
            "https://proxy.example.com/rigby/rpc/user/me"
        );
    }

    #[test]
    fn default_is_public_host() {
        let base = BaseUrl::default();
        assert_eq!(base.to_string(), "https://api.rigby.host");
    }

    #[test]
    fn plain_http_on_private_hosts() {
        for url in [
            "http://10.0.0.5:3000",
            "http://rigby.internal:8080",
            "http://api:3000",
        ] {
            let base = BaseUrl::new(url).unwrap();
            assert!(!base.is_secure());
            assert_eq!(base.rpc_url(&["rpc", "user", "me"]), format!("{}/rpc/user/me", url));
        }
    }

    #[test]
    fn invalid_scheme() {
        assert!(BaseUrl::new("ftp://api.rigby.host").is_err());
        assert!(BaseUrl::new("file:///tmp/rigby").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BaseUrl::new("/rpc/user/me").is_err());
    }

    #[test]
    fn invalid_query() {
        assert!(BaseUrl::new("https://api.rigby.host/?x=1").is_err());
    }

    #[test]
    fn serde_round_trips_through_string() {
        let base: BaseUrl = serde_json::from_str("\"https://api.rigby.host/\"").unwrap();
        assert_eq!(
            serde_json::to_string(&base).unwrap(),
            "\"https://api.rigby.host\""
        );
        assert!(serde_json::from_str::<BaseUrl>("\"ftp://x\"").is_err());
    }
}
