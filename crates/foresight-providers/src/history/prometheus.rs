//! Prometheus History Source
//!
//! Implements the `MetricHistorySource` port with the Prometheus HTTP API
//! (`GET /api/v1/query_range`).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use foresight_domain::entities::{MetricSeries, Sample};
use foresight_domain::error::{Error, Result};
use foresight_domain::ports::MetricHistorySource;
use foresight_domain::value_objects::QueryWindow;

use crate::constants::{
    PROMETHEUS_QUERY_RANGE_PATH, PROMETHEUS_RESULT_TYPE_MATRIX, PROMETHEUS_STATUS_SUCCESS,
};
use crate::utils::{HttpResponseUtils, HttpStage};

/// Envelope of every Prometheus API response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    status: String,
    #[serde(default)]
    data: Option<RangeData>,
    #[serde(default)]
    error_type: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeData {
    result_type: String,
    #[serde(default)]
    result: Vec<RangeSeries>,
}

/// One matched label set with its `[unix_seconds, "value"]` pairs
#[derive(Debug, Deserialize)]
struct RangeSeries {
    #[serde(default)]
    metric: HashMap<String, String>,
    #[serde(default)]
    values: Vec<(f64, String)>,
}

/// Prometheus history source
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use foresight_providers::history::PrometheusHistorySource;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let source = PrometheusHistorySource::new(
///     "http://prometheus:9090".to_string(),
///     Duration::from_secs(10),
///     Client::new(),
/// );
/// ```
pub struct PrometheusHistorySource {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl PrometheusHistorySource {
    /// Create a new Prometheus history source
    ///
    /// # Arguments
    /// * `base_url` - Prometheus server URL (e.g., "http://prometheus:9090")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            timeout,
            http_client,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            PROMETHEUS_QUERY_RANGE_PATH
        )
    }

    async fn fetch(&self, query: &str, window: &QueryWindow) -> Result<ApiResponse> {
        let params = [
            ("query", query.to_string()),
            ("start", unix_seconds(window.start)),
            ("end", unix_seconds(window.end)),
            ("step", format!("{}s", window.step.num_seconds())),
        ];

        let response = self
            .http_client
            .get(self.endpoint())
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HttpStage::Query.transport_error("Prometheus", self.timeout, e))?;

        HttpResponseUtils::check_and_parse(response, "Prometheus", HttpStage::Query).await
    }
}

#[async_trait]
impl MetricHistorySource for PrometheusHistorySource {
    async fn query_range(&self, query: &str, window: &QueryWindow) -> Result<Vec<MetricSeries>> {
        let response = self.fetch(query, window).await?;

        if response.status != PROMETHEUS_STATUS_SUCCESS {
            return Err(Error::query_unavailable(format!(
                "Prometheus returned status '{}' ({}): {}",
                response.status,
                response.error_type.as_deref().unwrap_or("unknown"),
                response.error.as_deref().unwrap_or("no error message")
            )));
        }

        let data = response
            .data
            .ok_or_else(|| Error::query_unavailable("Prometheus response has no data"))?;
        if data.result_type != PROMETHEUS_RESULT_TYPE_MATRIX {
            return Err(Error::query_unavailable(format!(
                "expected a '{}' result, got '{}'",
                PROMETHEUS_RESULT_TYPE_MATRIX, data.result_type
            )));
        }

        debug!(
            query = query,
            matched = data.result.len(),
            "Prometheus range query answered"
        );

        data.result
            .into_iter()
            .map(|series| to_metric_series(series, window))
            .collect()
    }

    fn source_name(&self) -> &str {
        "prometheus"
    }
}

/// Unix seconds with millisecond precision, as the API expects
fn unix_seconds(instant: DateTime<Utc>) -> String {
    format!("{:.3}", instant.timestamp_millis() as f64 / 1000.0)
}

/// Convert one matched series; unparseable values become NaN
fn to_metric_series(series: RangeSeries, window: &QueryWindow) -> Result<MetricSeries> {
    let samples = series
        .values
        .into_iter()
        .filter_map(|(timestamp, value)| {
            let millis = (timestamp * 1000.0).round() as i64;
            DateTime::from_timestamp_millis(millis)
                .map(|ts| Sample::new(ts, value.parse::<f64>().unwrap_or(f64::NAN)))
        })
        .collect();

    MetricSeries::new(samples, window.step).map_err(|e| {
        Error::query_unavailable(format!(
            "malformed series {:?}: {}",
            series.metric.get("__name__"),
            e
        ))
    })
}
