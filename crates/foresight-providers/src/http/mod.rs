//! HTTP Client Abstractions
//!
//! Configuration for the `reqwest` client shared by the Prometheus source and
//! the Pushgateway publisher. The client is built once at start-up and injected
//! into each provider through its constructor.

pub mod provider;

pub use provider::HttpClientConfig;
// Re-export HttpResponseUtils from utils for convenience
pub use crate::utils::HttpResponseUtils;
