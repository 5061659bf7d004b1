//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::credentials;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    if credentials::clear()? {
        output::success("Removed stored credentials");
    } else {
        output::success("No stored credentials");
    }
    Ok(())
}
