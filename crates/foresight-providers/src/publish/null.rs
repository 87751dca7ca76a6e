//! Null publisher
//!
//! Used when no gateway is configured: the batch is logged and dropped.

use async_trait::async_trait;
use foresight_domain::entities::GaugeSet;
use foresight_domain::error::Result;
use foresight_domain::ports::MetricsPublisher;
use tracing::info;

/// Publisher that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMetricsPublisher;

impl NullMetricsPublisher {
    /// Create a null publisher
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricsPublisher for NullMetricsPublisher {
    async fn push(&self, job: &str, gauges: &GaugeSet) -> Result<()> {
        for (name, entry) in gauges.iter() {
            info!(job = job, gauge = name, value = ?entry.value, "Gauge not pushed (publisher disabled)");
        }
        Ok(())
    }

    fn publisher_name(&self) -> &str {
        "null"
    }
}
