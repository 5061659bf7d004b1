//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use rigby_rpc::RouteGroups;

use crate::cli::ConnectionArgs;
use crate::connection;
use crate::credentials::{self, StoredCredentials};
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Store the token without checking it against the API
    #[arg(long)]
    pub no_verify: bool,
}

pub async fn run(args: LoginArgs, connection: &ConnectionArgs) -> Result<()> {
    let token = connection
        .token
        .clone()
        .context("Pass the token to store with --token or RIGBY_TOKEN")?;

    let (client, _) = connection::connect(connection)?;

    if !args.no_verify {
        client
            .user()
            .me(Value::Null)
            .await
            .context("Token was rejected")?;
    }

    // The effective URL, which may itself come from the previous login.
    let path = credentials::save(&StoredCredentials {
        base_url: Some(client.base_url().to_string()),
        token,
    })?;

    output::success("Logged in successfully");
    output::field("Base URL", &client.base_url().to_string());
    output::field("Stored in", &path.display().to_string());

    Ok(())
}
