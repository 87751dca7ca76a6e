//! Shared utilities for provider implementations

pub mod http_response;

pub use http_response::{HttpResponseUtils, HttpStage};
