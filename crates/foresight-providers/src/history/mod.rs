//! History source implementations
//!
//! | Source | Description |
//! |--------|-------------|
//! | [`PrometheusHistorySource`] | Prometheus HTTP API range queries |
//! | [`NullHistorySource`] | Never returns data, forcing synthetic histories |

pub mod null;
#[cfg(feature = "history-prometheus")]
pub mod prometheus;

pub use null::NullHistorySource;
#[cfg(feature = "history-prometheus")]
pub use prometheus::PrometheusHistorySource;
