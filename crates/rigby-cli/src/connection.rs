//! Build an API client from flags, environment and stored credentials.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use rigby_rpc::RigbyClient;

use crate::cli::ConnectionArgs;
use crate::credentials;

/// Where the token in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Argument,
    Stored,
}

impl TokenSource {
    pub fn describe(self) -> &'static str {
        match self {
            TokenSource::Argument => "flag or environment",
            TokenSource::Stored => "stored credentials",
        }
    }
}

/// Resolve connection settings and build a client.
pub fn connect(args: &ConnectionArgs) -> Result<(RigbyClient, TokenSource)> {
    // An explicit token must not be blocked by a broken credentials file,
    // otherwise `login` could never repair it.
    let stored = match credentials::load() {
        Ok(stored) => stored,
        Err(err) if args.token.is_some() => {
            warn!(error = %format!("{:#}", err), "ignoring unreadable stored credentials");
            None
        }
        Err(err) => return Err(err),
    };

    let (token, source) = match (&args.token, &stored) {
        (Some(token), _) => (token.clone(), TokenSource::Argument),
        (None, Some(stored)) => (stored.token.clone(), TokenSource::Stored),
        (None, None) => anyhow::bail!(
            "No token. Pass --token, set RIGBY_TOKEN, or run 'rigby login --token <TOKEN>' first."
        ),
    };

    let base_url = args
        .base_url
        .clone()
        .or_else(|| stored.and_then(|s| s.base_url));

    let mut builder = RigbyClient::builder(token);
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let client = builder.build().context("Invalid connection settings")?;
    debug!(base_url = %client.base_url(), source = source.describe(), "client ready");

    Ok((client, source))
}
