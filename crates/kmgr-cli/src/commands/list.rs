//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kmgr_core::Primitives;

use crate::connection::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection endpoint, relative to the base address
    pub endpoint: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: ListArgs) -> Result<()> {
    let client = conn.client().await?;

    let resources = client
        .list(&args.endpoint)
        .await
        .with_context(|| format!("Failed to list {}", args.endpoint))?;

    output::response(&resources, args.pretty)
}
