//! # Foresight - Provider Implementations
//!
//! Concrete implementations of the ports defined in `foresight-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | History | `MetricHistorySource` | Prometheus, Null |
//! | Publisher | `MetricsPublisher` | Pushgateway, Null |
//! | Forecast | `ForecastModel` | AdditiveModel |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! foresight-providers = { version = "0.1", default-features = false, features = ["history-prometheus"] }
//! ```

// Re-export domain types commonly used with providers
pub use foresight_domain::error::{Error, Result};
pub use foresight_domain::ports::{ForecastModel, MetricHistorySource, MetricsPublisher};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration shared by the HTTP providers
pub mod http;

/// History source implementations
///
/// Implements `MetricHistorySource` for time-series databases.
pub mod history;

/// Publisher implementations
///
/// Implements `MetricsPublisher` for push-based collectors.
pub mod publish;

/// Forecast model implementations
///
/// Implements `ForecastModel` with an additive trend + seasonality regressor.
pub mod forecast;
