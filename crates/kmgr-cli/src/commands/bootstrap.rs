//! Bootstrap subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::payload;
use crate::connection::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct BootstrapCommand {
    #[command(subcommand)]
    pub command: BootstrapSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BootstrapSubcommand {
    /// GET an unauthenticated endpoint
    Get {
        /// Endpoint, relative to the base address
        endpoint: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// POST to an unauthenticated endpoint
    Post {
        /// Endpoint, relative to the base address
        endpoint: String,

        /// JSON request body
        #[arg(long)]
        data: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

pub async fn handle(conn: &ConnectionArgs, cmd: BootstrapCommand) -> Result<()> {
    let client = conn.bootstrap_client()?;

    match cmd.command {
        BootstrapSubcommand::Get { endpoint, pretty } => {
            let body = client
                .get(&endpoint)
                .await
                .with_context(|| format!("Failed to get {}", endpoint))?;
            output::response(&body, pretty)
        }
        BootstrapSubcommand::Post {
            endpoint,
            data,
            pretty,
        } => {
            let body = client
                .post(&endpoint, payload(data.as_deref())?)
                .await
                .with_context(|| format!("Failed to post to {}", endpoint))?;
            output::response(&body, pretty)
        }
    }
}
