//! External endpoint configuration

use std::time::Duration;

use foresight_domain::constants::DEFAULT_JOB_NAME;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PROMETHEUS_URL, DEFAULT_PUSHGATEWAY_URL};

/// Prometheus range-query endpoint
///
/// ```toml
/// [prometheus]
/// url = "http://prometheus:9090"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrometheusConfig {
    /// Server URL
    pub url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl PrometheusConfig {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PrometheusConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROMETHEUS_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Pushgateway endpoint
///
/// When `enabled` is false the batch is only logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushgatewayConfig {
    /// Push forecasts to the gateway
    pub enabled: bool,
    /// Gateway URL
    pub url: String,
    /// Job label of the pushed group
    pub job: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl PushgatewayConfig {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PushgatewayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_PUSHGATEWAY_URL.to_string(),
            job: DEFAULT_JOB_NAME.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
