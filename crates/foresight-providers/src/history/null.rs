//! Null history source
//!
//! Matches nothing, so every cycle forecasts from synthetic histories.

use async_trait::async_trait;
use foresight_domain::entities::MetricSeries;
use foresight_domain::error::Result;
use foresight_domain::ports::MetricHistorySource;
use foresight_domain::value_objects::QueryWindow;

/// History source that never has data
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHistorySource;

impl NullHistorySource {
    /// Create a null history source
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricHistorySource for NullHistorySource {
    async fn query_range(&self, _query: &str, _window: &QueryWindow) -> Result<Vec<MetricSeries>> {
        Ok(Vec::new())
    }

    fn source_name(&self) -> &str {
        "null"
    }
}
