use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with an isolated HOME so stored credentials never leak
/// between tests or into the real user profile.
pub fn run_cli_with_env(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rigby"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env_remove("RIGBY_TOKEN");
    cmd.env_remove("RIGBY_BASE_URL");
    cmd.env_remove("RIGBY_TIMEOUT");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with an isolated HOME and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path) -> String {
    let output = run_cli_with_env(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with an isolated HOME and expect failure.
pub fn run_cli_with_env_failure(args: &[&str], home: &Path) -> String {
    let output = run_cli_with_env(args, home);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Run a blocking CLI invocation from an async test without stalling the
/// mock server's runtime.
pub async fn run_async<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("CLI task panicked")
}
