//! kmgr - CLI tool for key-manager appliance exploration.
//!
//! This is a thin wrapper over `kmgr-rest`, intended for manual exploration
//! and debugging of an appliance's REST API. Nothing is persisted between
//! invocations; every command signs in afresh.

mod cli;
mod commands;
mod connection;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{bootstrap, create, delete, get, list, sign_in, update};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let conn = &cli.connection;
    match cli.command {
        Commands::SignIn(args) => sign_in::run(conn, args).await,
        Commands::List(args) => list::run(conn, args).await,
        Commands::Get(args) => get::run(conn, args).await,
        Commands::Create(args) => create::run(conn, args).await,
        Commands::Update(args) => update::run(conn, args).await,
        Commands::Delete(args) => delete::run(conn, args).await,
        Commands::Bootstrap(cmd) => bootstrap::handle(conn, cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so command output on stdout stays parseable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
