//! Pushgateway Publisher
//!
//! Implements the `MetricsPublisher` port by replacing the job's metric group
//! on a Prometheus Pushgateway (`PUT /metrics/job/<job>`), with the body
//! encoded by the `prometheus` crate's text encoder.

use std::time::Duration;

use async_trait::async_trait;
use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use foresight_domain::entities::GaugeSet;
use foresight_domain::error::{Error, Result};
use foresight_domain::ports::MetricsPublisher;

use crate::constants::PUSHGATEWAY_JOB_PATH;
use crate::utils::{HttpResponseUtils, HttpStage};

/// Pushgateway publisher
///
/// Gauges that have never been set are left out of the batch rather than
/// pushed as zero.
pub struct PushgatewayPublisher {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl PushgatewayPublisher {
    /// Create a new Pushgateway publisher
    ///
    /// # Arguments
    /// * `base_url` - Gateway URL (e.g., "http://pushgateway:9091")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making requests
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            timeout,
            http_client,
        }
    }

    fn endpoint(&self, job: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url.trim_end_matches('/'),
            PUSHGATEWAY_JOB_PATH,
            job
        )
    }

    /// Encode the set gauges in the text exposition format
    ///
    /// Returns the body and its content type.
    pub fn encode(gauges: &GaugeSet) -> Result<(Vec<u8>, String)> {
        let registry = Registry::new();
        for (name, entry) in gauges.iter() {
            let Some(value) = entry.value else {
                continue;
            };
            let help = if entry.help.is_empty() {
                name
            } else {
                entry.help.as_str()
            };
            let gauge = Gauge::with_opts(Opts::new(name, help))
                .map_err(|e| Error::push_failed_with_source(format!("invalid gauge '{name}'"), e))?;
            gauge.set(value);
            registry
                .register(Box::new(gauge))
                .map_err(|e| Error::push_failed_with_source(format!("duplicate gauge '{name}'"), e))?;
        }

        let encoder = TextEncoder::new();
        let mut body = Vec::new();
        encoder
            .encode(&registry.gather(), &mut body)
            .map_err(|e| Error::push_failed_with_source("failed to encode gauges", e))?;
        Ok((body, encoder.format_type().to_string()))
    }
}

#[async_trait]
impl MetricsPublisher for PushgatewayPublisher {
    async fn push(&self, job: &str, gauges: &GaugeSet) -> Result<()> {
        let (body, content_type) = Self::encode(gauges)?;
        debug!(job = job, bytes = body.len(), "Pushing gauges");

        let response = self
            .http_client
            .put(self.endpoint(job))
            .header(CONTENT_TYPE, content_type)
            .timeout(self.timeout)
            .body(body)
            .send()
            .await
            .map_err(|e| HttpStage::Push.transport_error("Pushgateway", self.timeout, e))?;

        HttpResponseUtils::check_status(response, "Pushgateway", HttpStage::Push).await?;
        Ok(())
    }

    fn publisher_name(&self) -> &str {
        "pushgateway"
    }
}
