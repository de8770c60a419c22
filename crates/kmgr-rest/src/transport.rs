//! Request dispatch over HTTP.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, instrument, trace};

use kmgr_core::error::{ConfigurationError, InvalidInputError, ServerError, TransportError};
use kmgr_core::status::is_success;
use kmgr_core::{BaseUrl, BearerToken, Error, HttpMethod, RequestDescriptor, Result};

use crate::config::ClientConfig;

/// HTTP transport bound to one base address.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base: BaseUrl,
}

impl Transport {
    /// Build the underlying HTTP client from `config`.
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("kmgr/", env!("CARGO_PKG_VERSION")))
            .use_rustls_tls()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ConfigurationError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base: config.base_url.clone(),
        })
    }

    pub(crate) fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        self.base.join(endpoint)
    }

    /// Send one request and classify the response.
    ///
    /// With a token, the request carries `Authorization: Bearer <token>`.
    /// Without one it is sent unauthenticated. `Content-Type: application/json`
    /// is always set. The whole body is read before classification and is
    /// returned on success or carried in the [`ServerError`] on failure.
    #[instrument(skip(self, request, token), fields(method = %request.method, url = %request.url))]
    pub(crate) async fn dispatch(
        &self,
        request: RequestDescriptor,
        token: Option<&BearerToken>,
    ) -> Result<Vec<u8>> {
        let RequestDescriptor { method, url, body } = request;

        let url = reqwest::Url::parse(&url).map_err(|e| InvalidInputError::RequestUrl {
            value: url.clone(),
            reason: e.to_string(),
        })?;

        debug!(authenticated = token.is_some(), "Dispatching request");

        let mut builder = self
            .http
            .request(reqwest_method(method), url)
            .headers(request_headers(token)?);
        if let Some(bytes) = body.into_bytes() {
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body {
                message: error_chain(&e),
            })?;

        trace!(status, bytes = body.len(), "Response received");

        if is_success(status) {
            Ok(body.to_vec())
        } else {
            debug!(status, "Request failed");
            Err(ServerError::new(status, String::from_utf8_lossy(&body)).into())
        }
    }
}

fn request_headers(token: Option<&BearerToken>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&token.authorization_value()).map_err(|_| {
            InvalidInputError::HeaderValue {
                name: AUTHORIZATION.to_string(),
            }
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    let message = error_chain(&err);
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}

// reqwest's own message omits the cause (DNS, TLS handshake, refused), so
// append the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_headers_carry_token_and_content_type() {
        let token = BearerToken::new("abc123");
        let headers = request_headers(Some(&token)).unwrap();
        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers[AUTHORIZATION], "Bearer abc123");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn unauthenticated_headers_omit_authorization() {
        let headers = request_headers(None).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let token = BearerToken::new("abc\n123");
        assert!(matches!(
            request_headers(Some(&token)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_before_sending() {
        let transport = Transport::new(&ClientConfig::default()).unwrap();
        let request = RequestDescriptor::new(HttpMethod::Get, "not a url");
        let result = transport.dispatch(request, None).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
