//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kmgr_core::Primitives;

use super::payload;
use crate::connection::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Collection endpoint, relative to the base address
    pub endpoint: String,

    /// JSON request body
    #[arg(long)]
    pub data: Option<String>,

    /// Print only the value at this field path (e.g. "id" or "resources.0.id")
    #[arg(long)]
    pub field: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: CreateArgs) -> Result<()> {
    let client = conn.authenticated_client().await?;
    let payload = payload(args.data.as_deref())?;

    let result = match &args.field {
        Some(field) => client.post_data(&args.endpoint, payload, field).await,
        None => client.post_data_raw(&args.endpoint, payload).await,
    }
    .with_context(|| format!("Failed to create in {}", args.endpoint))?;

    output::response(&result, args.pretty)
}
