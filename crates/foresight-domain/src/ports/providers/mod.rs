//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`MetricHistorySource`] | Range queries against a time-series database |
//! | [`ForecastModel`] | Univariate point forecasting |
//! | [`MetricsPublisher`] | Batch push of gauges to a collector |

/// Forecast model port
pub mod forecast;
/// History source port
pub mod history;
/// Publisher port
pub mod publisher;

pub use forecast::ForecastModel;
pub use history::MetricHistorySource;
pub use publisher::MetricsPublisher;
