//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use kmgr_core::{BaseUrl, Result};

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Sign-in endpoint, relative to the base address.
pub const DEFAULT_SIGN_IN_PATH: &str = "token";

/// Settings shared by [`Client`](crate::Client) and
/// [`BootstrapClient`](crate::BootstrapClient).
///
/// Certificate verification is off unless `accept_invalid_certs` is set to
/// `false`: appliances are commonly deployed with self-signed certificates.
///
/// Deserializes with every field optional:
///
/// ```
/// use kmgr_rest::ClientConfig;
///
/// let config: ClientConfig =
///     serde_json::from_str(r#"{"base_url": "https://kms.example.com"}"#).unwrap();
/// assert_eq!(config.timeout_secs, 180);
/// assert!(config.accept_invalid_certs);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Address of the appliance.
    pub base_url: BaseUrl,
    /// Timeout for each request, in seconds.
    pub timeout_secs: u64,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
    /// Path of the sign-in endpoint.
    pub sign_in_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: true,
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base address with default settings.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Create a configuration from an optional address string, falling back to
    /// the default address.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` is present but not a valid base URL.
    pub fn from_address(address: Option<&str>) -> Result<Self> {
        match address {
            Some(address) if !address.is_empty() => Ok(Self::new(BaseUrl::new(address)?)),
            _ => Ok(Self::default()),
        }
    }

    /// Set the per-request timeout. Fractions of a second round up.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self
    }

    /// Enable or disable TLS certificate verification bypass.
    pub fn accept_invalid_certs(mut self, on: bool) -> Self {
        self.accept_invalid_certs = on;
        self
    }

    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = path.into();
        self
    }

    /// The per-request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_appliance_posture() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(180));
        assert!(config.accept_invalid_certs);
        assert_eq!(config.sign_in_path, "token");
        assert_eq!(config.base_url, BaseUrl::default());
    }

    #[test]
    fn missing_address_falls_back_to_default() {
        assert_eq!(ClientConfig::from_address(None).unwrap().base_url, BaseUrl::default());
        assert_eq!(ClientConfig::from_address(Some("")).unwrap().base_url, BaseUrl::default());
    }

    #[test]
    fn invalid_address_is_rejected() {
        assert!(ClientConfig::from_address(Some("not a url")).is_err());
    }

    #[test]
    fn sub_second_timeout_rounds_up() {
        let config = ClientConfig::default().with_timeout(Duration::from_millis(500));
        assert_eq!(config.timeout(), Duration::from_secs(1));

        let config = ClientConfig::default().with_timeout(Duration::from_millis(2500));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_secs": 0}"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(
            ClientConfig::default().with_timeout(Duration::ZERO).timeout(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"base_url": "https://10.1.1.1", "accept_invalid_certs": false, "timeout_secs": 30}"#,
        )
        .unwrap();
        assert_eq!(config.base_url.host(), Some("10.1.1.1"));
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.sign_in_path, DEFAULT_SIGN_IN_PATH);
    }
}
