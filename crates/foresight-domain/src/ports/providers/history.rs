//! History Source Port
//!
//! Port for time-series databases that answer range queries.

use async_trait::async_trait;

use crate::entities::MetricSeries;
use crate::error::Result;
use crate::value_objects::QueryWindow;

/// Range query interface of a time-series database
///
/// Failures are reported as [`crate::Error::QueryUnavailable`]. An empty
/// vector means the query matched nothing.
#[async_trait]
pub trait MetricHistorySource: Send + Sync {
    /// Evaluate `query` over `window`, one series per matched label set
    async fn query_range(&self, query: &str, window: &QueryWindow) -> Result<Vec<MetricSeries>>;

    /// Get the name of this source
    fn source_name(&self) -> &str;
}
