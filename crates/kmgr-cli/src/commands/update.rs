//! Update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use kmgr_core::Primitives;

use super::payload;
use crate::connection::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Endpoint, relative to the base address
    pub endpoint: String,

    /// Resource identifier appended to the endpoint
    #[arg(long)]
    pub id: Option<String>,

    /// JSON request body
    #[arg(long)]
    pub data: Option<String>,

    /// Print only the value at this field path (required without --id)
    #[arg(long, required_unless_present = "id")]
    pub field: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(conn: &ConnectionArgs, args: UpdateArgs) -> Result<()> {
    let client = conn.authenticated_client().await?;
    let payload = payload(args.data.as_deref())?;

    let result = match (&args.id, &args.field) {
        (Some(id), Some(field)) => client.update_data(id, &args.endpoint, payload, field).await,
        (Some(id), None) => client.update_data_raw(id, &args.endpoint, payload).await,
        (None, Some(field)) => {
            client
                .update_data_full_path(&args.endpoint, payload, field)
                .await
        }
        (None, None) => bail!("--field is required without --id"),
    }
    .with_context(|| format!("Failed to update {}", args.endpoint))?;

    output::response(&result, args.pretty)
}
