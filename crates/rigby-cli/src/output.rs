//! Terminal output for the `rigby` binary.
//!
//! Call results and route listings go to stdout so they can be piped into
//! other tools. Status lines and failures go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

use rigby_rpc::Route;

/// Report a completed action on stderr.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Report a failed command with its full context chain, once.
///
/// API errors already carry the status and raw body in their message.
pub fn failure(err: &anyhow::Error) {
    eprintln!("{} {:#}", "✗".red(), err);
}

/// Print a `label: value` line describing the connection.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print the unwrapped result of an API call.
pub fn call_result(value: &Value, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}

/// Print one row of the route table, either aligned text or one JSON object.
pub fn route(route: &Route, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(route)?);
    } else {
        println!("{:<32} {}", route.to_string(), route.url_path());
    }
    Ok(())
}
