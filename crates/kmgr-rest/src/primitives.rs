//! CRUD primitives over [`Client`].

use async_trait::async_trait;
use tracing::{debug, instrument};

use kmgr_core::extract::{RESOURCES, extract};
use kmgr_core::{BaseUrl, Error, HttpMethod, Payload, Primitives, RequestDescriptor, Result};

use crate::client::Client;

impl Client {
    async fn send(&self, method: HttpMethod, url: String, payload: Payload) -> Result<Vec<u8>> {
        let request = RequestDescriptor::new(method, url).with_body(payload);
        self.dispatch(request, None).await
    }

    fn item_url(&self, endpoint: &str, id: &str) -> String {
        self.endpoint_url(&[endpoint, id])
    }
}

fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

#[async_trait]
impl Primitives for Client {
    fn base_url(&self) -> &BaseUrl {
        Client::base_url(self)
    }

    #[instrument(skip(self))]
    async fn list(&self, endpoint: &str) -> Result<String> {
        debug!("Listing resources");
        let body = self
            .send(HttpMethod::Get, self.endpoint_url(&[endpoint]), Payload::Empty)
            .await?;
        project(&body, RESOURCES)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str, endpoint: &str) -> Result<String> {
        debug!("Getting resource");
        let body = self
            .send(HttpMethod::Get, self.item_url(endpoint, id), Payload::Empty)
            .await?;
        Ok(body_text(&body))
    }

    #[instrument(skip(self))]
    async fn read_by_param(&self, id: &str, endpoint: &str) -> Result<String> {
        let url = if id == "all" {
            self.endpoint_url(&[endpoint])
        } else {
            self.item_url(endpoint, id)
        };
        debug!(%url, "Reading resource");
        let body = self.send(HttpMethod::Get, url, Payload::Empty).await?;
        Ok(body_text(&body))
    }

    #[instrument(skip(self, payload))]
    async fn post_data(&self, endpoint: &str, payload: Payload, field: &str) -> Result<String> {
        debug!("Creating resource");
        let body = self
            .send(HttpMethod::Post, self.endpoint_url(&[endpoint]), payload)
            .await?;
        project(&body, field)
    }

    #[instrument(skip(self, payload))]
    async fn post_data_raw(&self, endpoint: &str, payload: Payload) -> Result<String> {
        debug!("Creating resource");
        let body = self
            .send(HttpMethod::Post, self.endpoint_url(&[endpoint]), payload)
            .await?;
        Ok(body_text(&body))
    }

    #[instrument(skip(self, payload))]
    async fn update_data(
        &self,
        id: &str,
        endpoint: &str,
        payload: Payload,
        field: &str,
    ) -> Result<String> {
        debug!("Updating resource");
        let body = self
            .send(HttpMethod::Patch, self.item_url(endpoint, id), payload)
            .await?;
        project(&body, field)
    }

    #[instrument(skip(self, payload))]
    async fn update_data_raw(&self, id: &str, endpoint: &str, payload: Payload) -> Result<String> {
        debug!("Updating resource");
        let body = self
            .send(HttpMethod::Patch, self.item_url(endpoint, id), payload)
            .await?;
        Ok(body_text(&body))
    }

    #[instrument(skip(self, payload))]
    async fn update_data_full_path(
        &self,
        endpoint: &str,
        payload: Payload,
        field: &str,
    ) -> Result<String> {
        debug!("Updating resource");
        let body = self
            .send(HttpMethod::Patch, self.endpoint_url(&[endpoint]), payload)
            .await?;
        project(&body, field)
    }

    #[instrument(skip(self, payload))]
    async fn delete_by_id(
        &self,
        method: HttpMethod,
        url: &str,
        payload: Payload,
    ) -> Result<String> {
        debug!("Deleting resource");
        let body = self.send(method, url.to_string(), payload).await?;
        project(&body, RESOURCES)
    }

    #[instrument(skip(self))]
    async fn delete(&self, endpoint: &str) -> Result<String> {
        debug!("Deleting resource");
        let body = self
            .send(HttpMethod::Delete, self.endpoint_url(&[endpoint]), Payload::Empty)
            .await?;
        project(&body, RESOURCES)
    }
}

// The request already succeeded. A body with no JSON in it (a 204, or a
// plain-text acknowledgement) has nothing to project.
fn project(body: &[u8], path: &str) -> Result<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(String::new());
    }
    match extract(body, path) {
        Err(Error::Decoding(err)) => {
            debug!(error = %err, "Success body is not JSON, nothing to project");
            Ok(String::new())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_yields_empty_string() {
        assert_eq!(project(b"", RESOURCES).unwrap(), "");
        assert_eq!(project(b"  \n", "id").unwrap(), "");
    }

    #[test]
    fn non_json_body_yields_empty_string() {
        assert_eq!(project(b"Deleted", RESOURCES).unwrap(), "");
        assert_eq!(project(b"<html></html>", "id").unwrap(), "");
    }

    #[test]
    fn empty_field_path_is_still_rejected() {
        assert!(matches!(
            project(br#"{"id":"a"}"#, ""),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn resources_are_extracted() {
        assert_eq!(
            project(br#"{"resources":[{"id":"gone"}]}"#, RESOURCES).unwrap(),
            r#"[{"id":"gone"}]"#
        );
    }

    #[test]
    fn invalid_utf8_body_is_replaced_lossily() {
        assert_eq!(body_text(&[b'o', b'k', 0xff]), "ok\u{fffd}");
    }
}
