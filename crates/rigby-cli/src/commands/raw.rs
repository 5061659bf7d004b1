//! Raw path call command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rigby_rpc::RpcPath;

use super::PayloadArgs;
use crate::cli::ConnectionArgs;
use crate::connection;

#[derive(Args, Debug)]
pub struct RawArgs {
    /// Slash-separated RPC path (e.g., rpc/gdps/config/get)
    pub path: String,

    #[command(flatten)]
    pub payload: PayloadArgs,
}

pub async fn run(args: RawArgs, connection: &ConnectionArgs) -> Result<()> {
    let path = RpcPath::parse(&args.path).context("Invalid RPC path")?;
    let payload = args.payload.read()?;

    let (client, _) = connection::connect(connection)?;

    let result = client
        .call_path(&path, payload)
        .await
        .with_context(|| format!("Call to {} failed", path))?;

    args.payload.print(&result)
}
