//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from Prometheus and the
//! Pushgateway. These are shared utilities, not ports.

use std::time::Duration;

use foresight_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Pipeline stage an HTTP exchange belongs to, selects the error variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStage {
    /// History range query
    Query,
    /// Gauge push
    Push,
}

impl HttpStage {
    /// Build the stage-specific error
    pub fn error(self, message: String) -> Error {
        match self {
            Self::Query => Error::query_unavailable(message),
            Self::Push => Error::push_failed(message),
        }
    }

    /// Build the stage-specific error for a transport failure
    pub fn transport_error(self, provider: &str, timeout: Duration, err: reqwest::Error) -> Error {
        let message = if err.is_timeout() {
            format!("{provider} {ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}")
        } else {
            format!("{provider} request failed: {err}")
        };
        match self {
            Self::Query => Error::query_unavailable_with_source(message, err),
            Self::Push => Error::push_failed_with_source(message, err),
        }
    }
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Fail on a non-success status, returning the response otherwise
    pub async fn check_status(
        response: Response,
        provider_name: &str,
        stage: HttpStage,
    ) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let code = status.as_u16();
        let context = match code {
            400 | 422 => format!("rejected the request ({code})"),
            401 | 403 => format!("authentication failed ({code})"),
            404 => "endpoint not found (404)".to_string(),
            429 => "rate limit exceeded (429)".to_string(),
            500..=599 => format!("server error ({code})"),
            _ => format!("request failed ({code})"),
        };
        Err(stage.error(format!("{provider_name} {context}: {}", error_text.trim())))
    }

    /// Check response status and parse the JSON body
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        stage: HttpStage,
    ) -> Result<T> {
        let response = Self::check_status(response, provider_name, stage).await?;
        response
            .json()
            .await
            .map_err(|e| stage.error(format!("{provider_name} response parse failed: {e}")))
    }
}
