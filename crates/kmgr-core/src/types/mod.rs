//! Core kmgr types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod base_url;
mod method;

pub use base_url::{BaseUrl, DEFAULT_BASE_URL};
pub use method::HttpMethod;
