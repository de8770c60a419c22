//! kmgr-rest - Authenticated REST client for a key-manager appliance.
//!
//! [`Client`] signs in once, holds the bearer token and implements
//! [`kmgr_core::Primitives`]. [`BootstrapClient`] talks to the handful of
//! endpoints that must be called without authentication.

mod bootstrap;
mod client;
mod config;
mod primitives;
mod sign_in;
mod transport;

pub use bootstrap::BootstrapClient;
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_SIGN_IN_PATH, DEFAULT_TIMEOUT_SECS};
