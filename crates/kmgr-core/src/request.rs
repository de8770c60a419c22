//! Outgoing request types.

use serde::Serialize;

use crate::error::EncodingError;
use crate::types::HttpMethod;

/// The body of an outgoing request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Payload {
    /// No body is sent.
    #[default]
    Empty,
    /// Pre-encoded JSON bytes.
    Json(Vec<u8>),
}

impl Payload {
    /// Encode a value as a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError`] if the value cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, EncodingError> {
        Ok(Payload::Json(serde_json::to_vec(value)?))
    }

    /// Consume the payload, returning the bytes to send, if any.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Payload::Empty => None,
            Payload::Json(bytes) => Some(bytes),
        }
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        // Serializing a Value cannot fail.
        Payload::Json(value.to_string().into_bytes())
    }
}

/// A single outbound request.
///
/// Built fresh for every call and consumed when sent.
#[derive(Debug)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub body: Payload,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: Payload::Empty,
        }
    }

    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = body;
        self
    }
}
