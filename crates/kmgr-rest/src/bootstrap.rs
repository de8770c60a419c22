//! Unauthenticated client for bootstrap endpoints.

use tracing::{debug, instrument};

use kmgr_core::{BaseUrl, HttpMethod, Payload, RequestDescriptor, Result};

use crate::config::ClientConfig;
use crate::transport::Transport;

/// A client for the few endpoints used before any account can sign in.
///
/// It holds no token, and nothing it sends carries an `Authorization` header.
#[derive(Debug, Clone)]
pub struct BootstrapClient {
    transport: Transport,
}

impl BootstrapClient {
    /// Create a bootstrap client for `address`, or the default address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid.
    pub fn connect(address: Option<&str>) -> Result<Self> {
        Self::new(&ClientConfig::from_address(address)?)
    }

    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    pub fn base_url(&self) -> &BaseUrl {
        self.transport.base_url()
    }

    /// Send `request` without authentication and return the raw body.
    pub async fn dispatch(&self, request: RequestDescriptor) -> Result<Vec<u8>> {
        self.transport.dispatch(request, None).await
    }

    /// GET `endpoint` and return the body verbatim.
    #[instrument(skip(self), fields(base_url = %self.base_url()))]
    pub async fn get(&self, endpoint: &str) -> Result<String> {
        debug!("Bootstrap GET");
        let request = RequestDescriptor::new(HttpMethod::Get, self.transport.url(endpoint));
        let body = self.dispatch(request).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// POST `payload` to `endpoint` and return the body verbatim.
    #[instrument(skip(self, payload), fields(base_url = %self.base_url()))]
    pub async fn post(&self, endpoint: &str, payload: Payload) -> Result<String> {
        debug!("Bootstrap POST");
        let request = RequestDescriptor::new(HttpMethod::Post, self.transport.url(endpoint))
            .with_body(payload);
        let body = self.dispatch(request).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_uses_given_address() {
        let client = BootstrapClient::connect(Some("https://10.0.0.9")).unwrap();
        assert_eq!(client.base_url().host(), Some("10.0.0.9"));
    }

    #[test]
    fn connect_rejects_invalid_address() {
        assert!(BootstrapClient::connect(Some("kms.example.com")).is_err());
    }
}
