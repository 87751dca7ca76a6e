//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `foresight_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "foresight.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "foresight";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FORESIGHT";

/// Separator between nested keys in environment variables
/// (e.g., `FORESIGHT_PUSHGATEWAY__URL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_FILTER_ENV_VAR: &str = "FORESIGHT_LOG";

/// File stem used for rolling log files when the path has none
pub const LOG_FILE_STEM: &str = "foresight";

// ============================================================================
// ENDPOINT CONSTANTS
// ============================================================================

/// Default Prometheus server URL
pub const DEFAULT_PROMETHEUS_URL: &str = "http://prometheus:9090";

/// Default Pushgateway URL
pub const DEFAULT_PUSHGATEWAY_URL: &str = "http://pushgateway:9091";

/// Default HTTP timeout for queries and pushes (seconds)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// SCHEDULING CONSTANTS
// ============================================================================

/// Cycle interval of the observed preset (seconds)
pub const OBSERVED_INTERVAL_SECS: u64 = 60;

/// Cycle interval of the synthetic preset (seconds)
pub const SYNTHETIC_INTERVAL_SECS: u64 = 30;

// ============================================================================
// HISTORY CONSTANTS
// ============================================================================

/// Window queried from Prometheus (2 days)
pub const QUERY_LOOKBACK_SECS: u64 = 2 * 24 * 3600;

/// Synthetic window of the baseline pattern (7 days)
pub const BASELINE_LOOKBACK_SECS: u64 = 7 * 24 * 3600;

/// Synthetic window of the smart pattern (2 days)
pub const SMART_LOOKBACK_SECS: u64 = 2 * 24 * 3600;

/// Changepoint prior scale of the synthetic preset
pub const SYNTHETIC_CHANGEPOINT_PRIOR_SCALE: f64 = 0.5;

// ============================================================================
// WINDOWS EXPORTER QUERIES
// ============================================================================

/// Used share of the C: volume
pub const QUERY_DISK_USAGE: &str = r#"100 * (1 - (windows_logical_disk_free_bytes{job="windows-pc", volume="C:"} / windows_logical_disk_size_bytes{job="windows-pc", volume="C:"}))"#;

/// Non-idle CPU share
pub const QUERY_CPU_USAGE: &str =
    r#"100 - (avg(rate(windows_cpu_time_total{job="windows-pc", mode="idle"}[5m])) * 100)"#;

/// Used share of physical memory
pub const QUERY_MEMORY_USAGE: &str = r#"100 * (1 - (windows_memory_available_bytes{job="windows-pc"} / windows_memory_physical_total_bytes{job="windows-pc"}))"#;

/// Network throughput in bytes per second
pub const QUERY_NETWORK_TRAFFIC: &str = r#"sum(rate(windows_net_bytes_total{job="windows-pc"}[5m]))"#;

/// Bytes per second to megabytes per second
pub const BYTES_TO_MEGABYTES: f64 = 0.000_001;
