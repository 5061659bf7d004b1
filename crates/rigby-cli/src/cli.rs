//! CLI argument definitions.

use clap::{Args, Parser};

use crate::commands::Command;

/// Command-line client for the Rigby game-server-hosting API.
#[derive(Parser, Debug)]
#[command(name = "rigby")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where and as whom to connect. Flags win over environment variables,
/// which win over stored credentials.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// API base URL
    #[arg(long, env = "RIGBY_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token
    #[arg(long, env = "RIGBY_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "RIGBY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}
