//! Base address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Address used when no base address is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost";

/// A validated base address of a key-manager appliance.
///
/// The URL must be absolute, use `http` or `https`, and name a host. A trailing
/// slash is dropped so that endpoint paths can be joined with a single `/`.
///
/// # Example
///
/// ```
/// use kmgr_core::BaseUrl;
///
/// let base = BaseUrl::new("https://kms.example.com/").unwrap();
/// assert_eq!(base.join("api/v1/vault/keys2"),
///            "https://kms.example.com/api/v1/vault/keys2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the address used when none is configured.
    pub fn default_address() -> Self {
        Self(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }

    /// Joins an endpoint path onto the base address with exactly one `/`.
    pub fn join(&self, endpoint: &str) -> String {
        // The URL crate always renders a trailing slash on root paths.
        let base = self.0.as_str().trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, endpoint)
        }
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "https" && scheme != "http" {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}'", scheme),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::default_address()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://kms.example.com").unwrap();
        assert_eq!(base.host(), Some("kms.example.com"));
    }

    #[test]
    fn valid_plain_http_url() {
        let base = BaseUrl::new("http://10.0.0.5:8080").unwrap();
        assert_eq!(base.host(), Some("10.0.0.5"));
    }

    #[test]
    fn join_normalizes_slashes() {
        let base = BaseUrl::new("https://kms.example.com/").unwrap();
        assert_eq!(base.join("things"), "https://kms.example.com/things");
        assert_eq!(base.join("/things/xyz"), "https://kms.example.com/things/xyz");
        assert_eq!(base.join(""), "https://kms.example.com");
    }

    #[test]
    fn join_keeps_base_path_prefix() {
        let base = BaseUrl::new("https://kms.example.com/api/v1/").unwrap();
        assert_eq!(base.join("vault/keys2"), "https://kms.example.com/api/v1/vault/keys2");
    }

    #[test]
    fn default_address_is_localhost() {
        assert_eq!(BaseUrl::default().host(), Some("localhost"));
        assert_eq!(BaseUrl::default().to_string(), DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_scheme() {
        assert!(BaseUrl::new("ftp://kms.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BaseUrl::new("/api/v1").is_err());
    }
}
