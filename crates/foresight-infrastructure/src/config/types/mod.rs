//! Configuration types
//!
//! One file per concern; [`AppConfig`] assembles them.

pub mod app;
pub mod endpoints;
pub mod logging;
pub mod metrics;
pub mod pipeline;

pub use app::{AppConfig, Preset};
pub use endpoints::{PrometheusConfig, PushgatewayConfig};
pub use logging::LoggingConfig;
pub use metrics::default_metric_specs;
pub use pipeline::{HistoryConfig, HistorySourceMode, ScheduleConfig};
