//! Authenticated client for the key-manager REST API.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use kmgr_core::error::{ConfigurationError, DecodingError};
use kmgr_core::{BaseUrl, BearerToken, Credentials, HttpMethod, RequestDescriptor, Result};

use crate::config::ClientConfig;
use crate::sign_in::sign_in;
use crate::transport::Transport;

/// A handle on one key-manager appliance.
///
/// Built once per provider configuration and shared by every resource
/// operation. Clones are cheap and share the same transport and token.
///
/// A client built without credentials holds an empty token; requests still
/// carry an `Authorization` header, so only endpoints that ignore it or calls
/// that pass a token override will succeed.
///
/// # Thread Safety
///
/// The token is written once during construction. It only changes again if
/// the caller opts into [`Client::refresh`], which swaps it under a write lock.
///
/// # Example
///
/// ```no_run
/// use kmgr_core::Primitives;
/// use kmgr_rest::Client;
///
/// # async fn example() -> Result<(), kmgr_core::Error> {
/// let client = Client::connect(
///     Some("https://kms.example.com"),
///     None,
///     None,
///     Some("admin"),
///     Some("secret"),
/// )
/// .await?;
///
/// let keys = client.list("api/v1/vault/keys2").await?;
/// println!("{}", keys);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Transport,
    sign_in_path: String,
    credentials: Option<Credentials>,
    token: RwLock<BearerToken>,
}

impl Client {
    /// Connect to the appliance at `address`, signing in if both `username`
    /// and `password` are given.
    ///
    /// A missing address falls back to [`kmgr_core::DEFAULT_BASE_URL`]. A
    /// missing or empty username or password yields an unauthenticated client
    /// without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or sign-in fails.
    pub async fn connect(
        address: Option<&str>,
        auth_domain: Option<&str>,
        domain: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self> {
        let config = ClientConfig::from_address(address)?;

        let credentials = match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(
                    Credentials::new(username, password)
                        .with_auth_domain(auth_domain.unwrap_or_default())
                        .with_domain(domain.unwrap_or_default()),
                )
            }
            _ => None,
        };

        Self::new(config, credentials).await
    }

    /// Build a client from `config`, signing in with `credentials` if given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingCredentials`] if `credentials` is
    /// present but incomplete, or any error from sign-in.
    #[instrument(skip(config, credentials), fields(base_url = %config.base_url))]
    pub async fn new(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let transport = Transport::new(&config)?;

        let token = match &credentials {
            Some(credentials) => sign_in(&transport, &config.sign_in_path, credentials).await?,
            None => {
                debug!("No credentials supplied, client is unauthenticated");
                BearerToken::empty()
            }
        };

        Ok(Self::assemble(transport, config, credentials, token))
    }

    /// Build a client around a token obtained elsewhere.
    pub fn with_token(config: ClientConfig, token: BearerToken) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self::assemble(transport, config, None, token))
    }

    fn assemble(
        transport: Transport,
        config: ClientConfig,
        credentials: Option<Credentials>,
        token: BearerToken,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                sign_in_path: config.sign_in_path,
                credentials,
                token: RwLock::new(token),
            }),
        }
    }

    /// Returns the base address requests are sent to.
    pub fn base_url(&self) -> &BaseUrl {
        self.inner.transport.base_url()
    }

    /// Returns a snapshot of the current token.
    pub async fn token(&self) -> BearerToken {
        self.inner.token.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        !self.inner.token.read().await.is_empty()
    }

    /// Compose a full URL from path segments below the base address.
    ///
    /// Intended for [`Primitives::delete_by_id`](kmgr_core::Primitives::delete_by_id),
    /// which takes an absolute URL.
    pub fn endpoint_url(&self, segments: &[&str]) -> String {
        let path = segments
            .iter()
            .map(|s| s.trim_matches('/'))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        self.inner.transport.url(&path)
    }

    /// Sign in again with the stored credentials and replace the token.
    ///
    /// Nothing calls this automatically; a client keeps its first token
    /// unless the caller opts in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingCredentials`] for a client built
    /// without credentials, or any error from sign-in. The old token is kept
    /// on failure.
    #[instrument(skip(self), fields(base_url = %self.base_url()))]
    pub async fn refresh(&self) -> Result<()> {
        info!("Refreshing token");

        let credentials = self
            .inner
            .credentials
            .as_ref()
            .ok_or(ConfigurationError::MissingCredentials)?;

        let token = sign_in(&self.inner.transport, &self.inner.sign_in_path, credentials).await?;
        *self.inner.token.write().await = token;

        debug!("Token refreshed");
        Ok(())
    }

    /// Send `request`, authenticated with `token_override` if given or the
    /// stored token otherwise, and return the raw body.
    pub async fn dispatch(
        &self,
        request: RequestDescriptor,
        token_override: Option<&BearerToken>,
    ) -> Result<Vec<u8>> {
        match token_override {
            Some(token) => self.inner.transport.dispatch(request, Some(token)).await,
            None => {
                let token = self.token().await;
                self.inner.transport.dispatch(request, Some(&token)).await
            }
        }
    }

    /// GET `endpoint` and decode the body into `T`.
    #[instrument(skip(self))]
    pub async fn get_typed<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = RequestDescriptor::new(HttpMethod::Get, self.inner.transport.url(endpoint));
        let body = self.dispatch(request, None).await?;
        let value = serde_json::from_slice(&body).map_err(|e| DecodingError::new(endpoint, e))?;
        Ok(value)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", self.base_url())
            .field("credentials", &self.inner.credentials)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
