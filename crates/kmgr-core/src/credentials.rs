//! Sign-in credentials type.

use std::fmt;

use crate::error::ConfigurationError;

/// Credentials used to sign in to the key manager.
///
/// Holds the username and password plus the optional authentication domain
/// (where the user is defined) and domain (where the session operates).
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use kmgr_core::Credentials;
///
/// let creds = Credentials::new("admin", "secret").with_domain("root");
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.domain(), "root");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
    auth_domain: String,
    domain: String,
}

impl Credentials {
    /// Create new credentials with empty auth domain and domain.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            auth_domain: String::new(),
            domain: String::new(),
        }
    }

    /// Set the domain the user is authenticated against.
    pub fn with_auth_domain(mut self, auth_domain: impl Into<String>) -> Self {
        self.auth_domain = auth_domain.into();
        self
    }

    /// Set the domain the session operates in.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing the sign-in request.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn auth_domain(&self) -> &str {
        &self.auth_domain
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Fails with [`ConfigurationError::MissingCredentials`] unless both the
    /// username and password are non-empty.
    pub fn ensure_complete(&self) -> Result<(), ConfigurationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ConfigurationError::MissingCredentials);
        }
        Ok(())
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("auth_domain", &self.auth_domain)
            .field("domain", &self.domain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("admin", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn incomplete_credentials_are_rejected() {
        for (user, pass) in [("", "pass"), ("user", ""), ("", "")] {
            let result = Credentials::new(user, pass).ensure_complete();
            assert!(matches!(result, Err(ConfigurationError::MissingCredentials)));
        }
        assert!(Credentials::new("user", "pass").ensure_complete().is_ok());
    }
}
