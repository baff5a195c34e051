//! vidyamitra-client — HTTP transport for the Vidyamitra API.
//!
//! Implements the `CareerApi` trait over reqwest, plus client configuration
//! loading and a `MockApi` for exercising the workflows without a server.

pub mod config;
pub mod http;
pub mod mock;

pub use config::{load_config, ClientConfig};
pub use http::ApiClient;
pub use mock::MockApi;
