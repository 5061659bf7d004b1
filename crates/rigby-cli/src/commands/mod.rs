//! Subcommand implementations.

mod call;
mod login;
mod logout;
mod raw;
mod routes;
mod whoami;

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store a token (and optional base URL) for later commands
    Login(login::LoginArgs),

    /// Remove stored credentials
    Logout(logout::LogoutArgs),

    /// Show the connection settings in use
    Whoami(whoami::WhoamiArgs),

    /// List the API route table
    Routes(routes::RoutesArgs),

    /// Call an API method by name, e.g. `levels.get`
    Call(call::CallArgs),

    /// Call an arbitrary RPC path, e.g. `rpc/gdps/config/get`
    Raw(raw::RawArgs),
}

pub async fn handle(cmd: Command, connection: &ConnectionArgs) -> Result<()> {
    match cmd {
        Command::Login(args) => login::run(args, connection).await,
        Command::Logout(args) => logout::run(args).await,
        Command::Whoami(args) => whoami::run(args, connection).await,
        Command::Routes(args) => routes::run(args),
        Command::Call(args) => call::run(args, connection).await,
        Command::Raw(args) => raw::run(args, connection).await,
    }
}

/// Request payload options shared by `call` and `raw`.
#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Inline JSON payload
    #[arg(long, short = 'd', conflicts_with = "file")]
    pub data: Option<String>,

    /// JSON file with the payload (use - for stdin)
    #[arg(long, short = 'f')]
    pub file: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl PayloadArgs {
    /// Read the payload; no payload means JSON `null`.
    pub fn read(&self) -> Result<Value> {
        if let Some(ref data) = self.data {
            return serde_json::from_str(data).context("Invalid JSON in --data");
        }

        match self.file.as_deref() {
            Some("-") => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read from stdin")?;
                serde_json::from_str(&buf).context("Invalid JSON from stdin")
            }
            Some(path) => {
                let content = std::fs::read_to_string(path).context("Failed to read JSON file")?;
                serde_json::from_str(&content).context("Invalid JSON in file")
            }
            None => Ok(Value::Null),
        }
    }

    /// Print a call result in the requested format.
    pub fn print(&self, value: &Value) -> Result<()> {
        output::call_result(value, self.compact)
    }
}
