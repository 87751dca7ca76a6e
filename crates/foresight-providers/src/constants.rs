//! Provider-specific constants

/// Prometheus range query endpoint, relative to the server URL
pub const PROMETHEUS_QUERY_RANGE_PATH: &str = "/api/v1/query_range";

/// Status value of a successful Prometheus API response
pub const PROMETHEUS_STATUS_SUCCESS: &str = "success";

/// Result type returned by range queries
pub const PROMETHEUS_RESULT_TYPE_MATRIX: &str = "matrix";

/// Pushgateway grouping path prefix, relative to the gateway URL
pub const PUSHGATEWAY_JOB_PATH: &str = "/metrics/job";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default request timeout for HTTP providers (seconds)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
