//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use kmgr_core::{HttpMethod, Primitives};

use super::payload;
use crate::connection::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Endpoint, relative to the base address
    pub endpoint: String,

    /// Resource identifier appended to the endpoint
    #[arg(long)]
    pub id: Option<String>,

    /// HTTP method to delete with (e.g. PATCH for a soft delete)
    #[arg(long)]
    pub method: Option<HttpMethod>,

    /// JSON request body
    #[arg(long)]
    pub data: Option<String>,
}

pub async fn run(conn: &ConnectionArgs, args: DeleteArgs) -> Result<()> {
    let client = conn.authenticated_client().await?;

    let explicit = args.id.is_some() || args.method.is_some() || args.data.is_some();
    let result = if explicit {
        let id = args.id.as_deref().unwrap_or_default();
        let url = client.endpoint_url(&[args.endpoint.as_str(), id]);
        let method = args.method.unwrap_or(HttpMethod::Delete);
        client
            .delete_by_id(method, &url, payload(args.data.as_deref())?)
            .await
    } else {
        client.delete(&args.endpoint).await
    }
    .with_context(|| format!("Failed to delete {}", args.endpoint))?;

    output::success("Deleted");
    output::response(&result, false)
}
