//! Route listing command implementation.

use anyhow::Result;
use clap::Args;

use rigby_rpc::routes;

use crate::output;

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Only list routes in this namespace
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Output one JSON object per route
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RoutesArgs) -> Result<()> {
    let selected: Vec<_> = match &args.namespace {
        Some(ns) => routes::in_namespace(ns).collect(),
        None => routes::ROUTES.iter().collect(),
    };

    if let Some(ns) = &args.namespace
        && selected.is_empty()
    {
        anyhow::bail!(
            "Unknown namespace '{}'. Known namespaces: {}",
            ns,
            routes::namespaces().join(", ")
        );
    }

    for route in selected {
        output::route(route, args.json)?;
    }

    Ok(())
}
