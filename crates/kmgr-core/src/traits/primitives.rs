//! Verb-shaped CRUD primitives.

use async_trait::async_trait;

use crate::Result;
use crate::request::Payload;
use crate::types::{BaseUrl, HttpMethod};

/// The CRUD operations every resource and data source is built from.
///
/// Endpoints are paths relative to [`Primitives::base_url`]. Every method
/// issues exactly one request and returns the server's error unchanged.
#[async_trait]
pub trait Primitives: Send + Sync {
    /// Returns the base address requests are sent to.
    fn base_url(&self) -> &BaseUrl;

    /// GET `endpoint` and return its `resources` array as raw JSON.
    async fn list(&self, endpoint: &str) -> Result<String>;

    /// GET `endpoint/id` and return the body verbatim.
    async fn get_by_id(&self, id: &str, endpoint: &str) -> Result<String>;

    /// Like [`Primitives::get_by_id`], except that an `id` of `"all"` reads
    /// the collection at `endpoint` itself.
    async fn read_by_param(&self, id: &str, endpoint: &str) -> Result<String>;

    /// POST `payload` to `endpoint` and return the value at `field`.
    async fn post_data(&self, endpoint: &str, payload: Payload, field: &str) -> Result<String>;

    /// POST `payload` to `endpoint` and return the body verbatim.
    async fn post_data_raw(&self, endpoint: &str, payload: Payload) -> Result<String>;

    /// PATCH `endpoint/id` and return the value at `field`.
    async fn update_data(
        &self,
        id: &str,
        endpoint: &str,
        payload: Payload,
        field: &str,
    ) -> Result<String>;

    /// PATCH `endpoint/id` and return the body verbatim.
    async fn update_data_raw(&self, id: &str, endpoint: &str, payload: Payload) -> Result<String>;

    /// PATCH `endpoint` (no id segment appended) and return the value at `field`.
    async fn update_data_full_path(
        &self,
        endpoint: &str,
        payload: Payload,
        field: &str,
    ) -> Result<String>;

    /// Send `method` to the absolute `url` and return the `resources` array.
    ///
    /// Used for deletes that need a specific verb or body, such as a PATCH
    /// that soft-deletes.
    async fn delete_by_id(&self, method: HttpMethod, url: &str, payload: Payload)
    -> Result<String>;

    /// DELETE `endpoint` and return the `resources` array.
    async fn delete(&self, endpoint: &str) -> Result<String>;
}
