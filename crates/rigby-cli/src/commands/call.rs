//! Call command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rigby_rpc::routes;

use super::PayloadArgs;
use crate::cli::ConnectionArgs;
use crate::connection;

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Dotted method name (e.g., levels.get, player.session.login)
    pub method: String,

    #[command(flatten)]
    pub payload: PayloadArgs,
}

pub async fn run(args: CallArgs, connection: &ConnectionArgs) -> Result<()> {
    let route = routes::lookup(&args.method).with_context(|| {
        format!(
            "Unknown method '{}'. Run 'rigby routes' to list methods.",
            args.method
        )
    })?;
    let payload = args.payload.read()?;

    let (client, _) = connection::connect(connection)?;

    let result = route
        .invoke(&client, payload)
        .await
        .with_context(|| format!("Call to {} failed", route))?;

    args.payload.print(&result)
}
