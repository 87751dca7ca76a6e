//! Publisher implementations
//!
//! | Publisher | Description |
//! |-----------|-------------|
//! | [`PushgatewayPublisher`] | Prometheus Pushgateway, text exposition format |
//! | [`NullMetricsPublisher`] | Logs the batch instead of sending it |

pub mod null;
#[cfg(feature = "publish-pushgateway")]
pub mod pushgateway;

pub use null::NullMetricsPublisher;
#[cfg(feature = "publish-pushgateway")]
pub use pushgateway::PushgatewayPublisher;
