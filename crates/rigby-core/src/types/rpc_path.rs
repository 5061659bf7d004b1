//! RPC path type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// An owned, non-empty sequence of RPC path segments.
///
/// Route tables use borrowed `&'static [&'static str]` paths directly; this
/// type is for paths that arrive at runtime, e.g. `rpc/gdps/config/get`
/// typed on a command line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RpcPath(Vec<String>);

impl RpcPath {
    /// Create a path from a list of segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or a segment is empty or
    /// contains `/`.
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Result<Self, Error> {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(Error::invalid_call("RPC path must not be empty"));
        }
        for segment in &segments {
            if segment.is_empty() || segment.contains('/') {
                return Err(InvalidInputError::Path {
                    value: segments.join("/"),
                    reason: format!("invalid segment '{}'", segment),
                }
                .into());
            }
        }
        Ok(Self(segments))
    }

    /// Parse a slash-separated path. Leading and trailing slashes are ignored.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(Error::invalid_call("RPC path must not be empty"));
        }
        Self::new(trimmed.split('/'))
    }

    /// Returns the path segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RpcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl FromStr for RpcPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slash_form() {
        let path = RpcPath::parse("/rpc/gdps/config/get/").unwrap();
        assert_eq!(path.segments(), ["rpc", "gdps", "config", "get"]);
        assert_eq!(path.to_string(), "rpc/gdps/config/get");
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn empty_path_is_invalid_call() {
        assert!(matches!(
            RpcPath::parse("  / "),
            Err(Error::InvalidCall { .. })
        ));
        assert!(matches!(
            RpcPath::new(Vec::<String>::new()),
            Err(Error::InvalidCall { .. })
        ));
    }

    #[test]
    fn rejects_empty_segment() {
        assert!(matches!(
            RpcPath::parse("rpc//user"),
            Err(Error::InvalidInput(InvalidInputError::Path { .. }))
        ));
    }
}
