//! Connection settings shared by every command.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use kmgr_core::Credentials;
use kmgr_rest::{BootstrapClient, Client, ClientConfig, DEFAULT_SIGN_IN_PATH, DEFAULT_TIMEOUT_SECS};

#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Appliance base address (defaults to https://localhost)
    #[arg(long, env = "KMGR_ADDRESS", global = true)]
    pub address: Option<String>,

    /// Username to sign in with
    #[arg(long, env = "KMGR_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password to sign in with
    #[arg(long, env = "KMGR_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Domain the user is defined in
    #[arg(long, env = "KMGR_AUTH_DOMAIN", global = true)]
    pub auth_domain: Option<String>,

    /// Domain to operate in
    #[arg(long, env = "KMGR_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// Verify the appliance's TLS certificate
    #[arg(long, env = "KMGR_VERIFY_TLS", global = true)]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, env = "KMGR_TIMEOUT_SECS", global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Endpoint credentials are posted to
    #[arg(long, env = "KMGR_SIGN_IN_PATH", global = true, default_value = DEFAULT_SIGN_IN_PATH)]
    pub sign_in_path: String,
}

impl ConnectionArgs {
    pub fn config(&self) -> Result<ClientConfig> {
        let config = ClientConfig::from_address(self.address.as_deref())
            .context("Invalid appliance address")?;

        Ok(config
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .accept_invalid_certs(!self.verify_tls)
            .with_sign_in_path(self.sign_in_path.as_str()))
    }

    fn credentials(&self) -> Option<Credentials> {
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;

        Some(
            Credentials::new(username, password)
                .with_auth_domain(self.auth_domain.clone().unwrap_or_default())
                .with_domain(self.domain.clone().unwrap_or_default()),
        )
    }

    /// Build a client, signing in when credentials are configured.
    pub async fn client(&self) -> Result<Client> {
        let config = self.config()?;
        let credentials = self.credentials();
        debug!(
            address = %config.base_url,
            authenticated = credentials.is_some(),
            verify_tls = !config.accept_invalid_certs,
            "Connecting"
        );
        Client::new(config, credentials)
            .await
            .context("Failed to sign in")
    }

    /// Build a client and fail unless it signed in.
    pub async fn authenticated_client(&self) -> Result<Client> {
        if self.credentials().is_none() {
            bail!(
                "No credentials. Pass --username and --password or set KMGR_USERNAME and KMGR_PASSWORD."
            );
        }
        self.client().await
    }

    pub fn bootstrap_client(&self) -> Result<BootstrapClient> {
        BootstrapClient::new(&self.config()?).context("Failed to create bootstrap client")
    }
}
