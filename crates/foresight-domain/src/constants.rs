//! Domain layer constants
//!
//! Publishing contract and sampling constants shared by every layer.
//! Infrastructure-specific constants remain in the infrastructure crate.

// ============================================================================
// SAMPLING CONSTANTS
// ============================================================================

/// Nominal spacing between samples of a metric series (5 minutes)
pub const SAMPLE_STEP_SECS: i64 = 300;

/// Number of steps past the last sample that a forecast targets (15 minutes)
pub const FORECAST_HORIZON_STEPS: usize = 3;

/// Minimum number of samples a series needs to be forecastable
pub const MIN_FORECAST_SAMPLES: usize = 2;

// ============================================================================
// VALUE DOMAIN CONSTANTS
// ============================================================================

/// Lower bound of every metric domain
pub const METRIC_VALUE_FLOOR: f64 = 0.0;

/// Upper bound of percentage metrics
pub const PERCENTAGE_CEILING: f64 = 100.0;

// ============================================================================
// GAUGE NAMES (publishing contract)
// ============================================================================

/// Predicted disk usage percentage 15 minutes ahead
pub const GAUGE_DISK: &str = "disk_percentage_predicted_in_15_min";

/// Predicted CPU usage percentage 15 minutes ahead
pub const GAUGE_CPU: &str = "cpu_usage_predicted_in_15_min";

/// Predicted memory usage percentage 15 minutes ahead
pub const GAUGE_MEMORY: &str = "memory_usage_predicted_in_15_min";

/// Predicted network traffic (MB/s) 15 minutes ahead
pub const GAUGE_NETWORK: &str = "network_usage_predicted_in_15_min";

/// Job label attached to every push
pub const DEFAULT_JOB_NAME: &str = "system_predictor";
