//! Ports
//!
//! Interfaces the application layer depends on. Implementations live in
//! `foresight-providers`.

/// Provider ports
pub mod providers;

pub use providers::{ForecastModel, MetricHistorySource, MetricsPublisher};
