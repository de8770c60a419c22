use std::process::{Command, Output};

/// Run the CLI binary against `address` with the given arguments.
///
/// Runs on a blocking thread so the mock server keeps serving while the
/// process waits.
pub async fn run_cli(address: &str, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kmgr"));
    for var in [
        "KMGR_ADDRESS",
        "KMGR_USERNAME",
        "KMGR_PASSWORD",
        "KMGR_AUTH_DOMAIN",
        "KMGR_DOMAIN",
        "KMGR_VERIFY_TLS",
        "KMGR_TIMEOUT_SECS",
        "KMGR_SIGN_IN_PATH",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("KMGR_ADDRESS", address);
    cmd.args(args);

    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI task panicked")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(address: &str, args: &[&str]) -> String {
    let output = run_cli(address, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
