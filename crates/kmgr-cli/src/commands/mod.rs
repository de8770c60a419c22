//! Subcommand implementations.

pub mod bootstrap;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod sign_in;
pub mod update;

use anyhow::{Context, Result};

use kmgr_core::Payload;

/// Parse a `--data` argument into a request payload.
pub(crate) fn payload(data: Option<&str>) -> Result<Payload> {
    match data {
        Some(data) => {
            let value: serde_json::Value =
                serde_json::from_str(data).context("--data is not valid JSON")?;
            Ok(Payload::from(value))
        }
        None => Ok(Payload::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_is_empty_payload() {
        assert_eq!(payload(None).unwrap(), Payload::Empty);
    }

    #[test]
    fn data_is_reencoded_compactly() {
        let payload = payload(Some(r#"{ "name" : "k1" }"#)).unwrap();
        assert_eq!(payload.into_bytes().unwrap(), br#"{"name":"k1"}"#.to_vec());
    }

    #[test]
    fn invalid_data_is_rejected() {
        assert!(payload(Some("{name")).is_err());
    }
}
