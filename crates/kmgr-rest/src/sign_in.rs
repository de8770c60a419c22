//! Exchanging credentials for a bearer token.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use kmgr_core::error::DecodingError;
use kmgr_core::{BearerToken, Credentials, HttpMethod, Payload, RequestDescriptor, Result};

use crate::transport::Transport;

/// Request body for the sign-in endpoint.
#[derive(Serialize)]
struct SignInRequest<'a> {
    username: &'a str,
    password: &'a str,
    auth_domain: &'a str,
    domain: &'a str,
}

/// Response from the sign-in endpoint.
#[derive(Debug, Deserialize)]
struct SignInResponse {
    jwt: String,
}

/// POST `credentials` to `path` and return the issued token.
///
/// Incomplete credentials fail before anything is sent. The request itself is
/// unauthenticated.
#[instrument(skip(transport, credentials), fields(username = %credentials.username()))]
pub(crate) async fn sign_in(
    transport: &Transport,
    path: &str,
    credentials: &Credentials,
) -> Result<BearerToken> {
    credentials.ensure_complete()?;

    info!("Signing in");

    let request = SignInRequest {
        username: credentials.username(),
        password: credentials.password(),
        auth_domain: credentials.auth_domain(),
        domain: credentials.domain(),
    };
    let descriptor = RequestDescriptor::new(HttpMethod::Post, transport.url(path))
        .with_body(Payload::json(&request)?);

    let body = transport.dispatch(descriptor, None).await?;

    let response: SignInResponse = serde_json::from_slice(&body)
        .map_err(|e| DecodingError::new("sign-in response", e))?;

    debug!("Signed in successfully");
    Ok(BearerToken::new(response.jwt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_in_request_uses_snake_case_fields() {
        let creds = Credentials::new("user", "pass")
            .with_auth_domain("root")
            .with_domain("tenant");
        let request = SignInRequest {
            username: creds.username(),
            password: creds.password(),
            auth_domain: creds.auth_domain(),
            domain: creds.domain(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "username": "user",
                "password": "pass",
                "auth_domain": "root",
                "domain": "tenant"
            })
        );
    }
}
