//! kmgr-core - Core types and traits for the kmgr key-manager client.
//!
//! The HTTP implementation lives in `kmgr-rest`; this crate holds what the
//! resource layer and the transport share: credentials, tokens, the error
//! taxonomy, request payloads, status classification, field-path extraction
//! and the [`Primitives`] trait.

pub mod credentials;
pub mod error;
pub mod extract;
pub mod request;
pub mod status;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::{
    ConfigurationError, DecodingError, EncodingError, Error, InvalidInputError, ServerError,
    TransportError,
};
pub use request::{Payload, RequestDescriptor};
pub use tokens::BearerToken;
pub use traits::Primitives;
pub use types::{BaseUrl, DEFAULT_BASE_URL, HttpMethod};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
