//! Sign-in command implementation.

use anyhow::Result;
use clap::Args;

use crate::connection::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct SignInArgs {
    /// Print the issued bearer token
    #[arg(long)]
    pub show_token: bool,
}

pub async fn run(conn: &ConnectionArgs, args: SignInArgs) -> Result<()> {
    let client = conn.authenticated_client().await?;

    output::success("Signed in successfully");
    output::field("Address", &client.base_url().to_string());
    if args.show_token {
        output::field("Token", client.token().await.as_str());
    }

    Ok(())
}
