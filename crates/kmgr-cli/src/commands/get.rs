//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kmgr_core::Primitives;

use crate::connection::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Collection endpoint, relative to the base address
    pub endpoint: String,

    /// Resource identifier; "all" reads the whole collection
    #[arg(default_value = "all")]
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: GetArgs) -> Result<()> {
    let client = conn.client().await?;

    let body = client
        .read_by_param(&args.id, &args.endpoint)
        .await
        .with_context(|| format!("Failed to get {}/{}", args.endpoint, args.id))?;

    output::response(&body, args.pretty)
}
