//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use rigby_rpc::RouteGroups;

use crate::cli::ConnectionArgs;
use crate::connection;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Also fetch the account from the API
    #[arg(long)]
    pub remote: bool,
}

pub async fn run(args: WhoamiArgs, connection: &ConnectionArgs) -> Result<()> {
    let (client, source) = connection::connect(connection)?;
    let config = client.client_config();

    output::field("Base URL", &config.base_url().to_string());
    output::field("Token", &config.token().redacted());
    output::field("Source", source.describe());
    output::field("Timeout", &format!("{}s", config.timeout().as_secs()));

    if args.remote {
        let me = client
            .user()
            .me(Value::Null)
            .await
            .context("Failed to fetch account")?;
        output::call_result(&me, false)?;
    }

    Ok(())
}
