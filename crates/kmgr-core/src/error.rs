//! Error types for kmgr.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, encoding, transport, server, decoding, and input validation
//! errors. Nothing in the client retries or swallows an error; every failure is
//! returned to the immediate caller.

use std::fmt;
use thiserror::Error;

/// The unified error type for kmgr operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration is missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// An outgoing payload could not be encoded as JSON.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// A response body expected to be JSON could not be parsed.
    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingError),

    /// Input validation errors (base URL, full URL, header value, field path).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code if this is a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server(err) => Some(err.status),
            _ => None,
        }
    }

    /// Check if the server reported that the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Configuration errors raised before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Sign-in was attempted without a username or password.
    #[error("missing credentials: username and password are required to sign in")]
    MissingCredentials,

    /// The HTTP client could not be built from the supplied settings.
    #[error("failed to build HTTP client: {message}")]
    HttpClient { message: String },
}

/// Failure to JSON-encode an outgoing payload.
#[derive(Debug, Error)]
#[error("failed to encode request body: {message}")]
pub struct EncodingError {
    pub message: String,
}

impl From<serde_json::Error> for EncodingError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The response body could not be read.
    #[error("failed to read response body: {message}")]
    Body { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success HTTP response.
///
/// Carries the numeric status and the raw body text so callers can surface the
/// server's own diagnostic verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl ServerError {
    /// Create a new server error.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {}, body: {}", self.status, self.body)
    }
}

impl std::error::Error for ServerError {}

/// Failure to parse a response body.
#[derive(Debug, Error)]
#[error("failed to decode {context}: {message}")]
pub struct DecodingError {
    /// What was being decoded (for example "sign-in response").
    pub context: String,
    pub message: String,
}

impl DecodingError {
    pub fn new(context: impl Into<String>, err: impl fmt::Display) -> Self {
        Self {
            context: context.into(),
            message: err.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid absolute request URL.
    #[error("invalid request URL '{value}': {reason}")]
    RequestUrl { value: String, reason: String },

    /// A value that cannot be sent as an HTTP header.
    #[error("invalid header value for {name}")]
    HeaderValue { name: String },

    /// Invalid field path expression.
    #[error("invalid field path '{value}': {reason}")]
    FieldPath { value: String, reason: String },

    /// Unknown HTTP method name.
    #[error("unsupported HTTP method '{value}'")]
    Method { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display_carries_status_and_body() {
        let err: Error = ServerError::new(401, r#"{"error":"bad credentials"}"#).into();
        assert_eq!(
            err.to_string(),
            r#"status: 401, body: {"error":"bad credentials"}"#
        );
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn not_found_only_for_404() {
        let missing: Error = ServerError::new(404, "").into();
        let broken: Error = ServerError::new(500, "").into();
        assert!(missing.is_not_found());
        assert!(!broken.is_not_found());
        assert!(!Error::from(ConfigurationError::MissingCredentials).is_not_found());
    }
}
