//! Metrics Publisher Port

use async_trait::async_trait;

use crate::entities::GaugeSet;
use crate::error::Result;

/// Push-based metrics collector
///
/// Failures are reported as [`crate::Error::PushFailed`].
#[async_trait]
pub trait MetricsPublisher: Send + Sync {
    /// Push every gauge in one batch, grouped under `job`
    async fn push(&self, job: &str, gauges: &GaugeSet) -> Result<()>;

    /// Get the name of this publisher
    fn publisher_name(&self) -> &str;
}
