//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`MetricSeries`] | Ordered, evenly spaced samples of one metric |
//! | [`MetricSpec`] | Static description of a forecast metric |
//! | [`GaugeSet`] | Latest published forecast per gauge |

/// Gauge registry that gets pushed every cycle
pub mod gauge;
/// Metric specifications
pub mod metric;
/// Time series of samples
pub mod series;

pub use gauge::{GaugeEntry, GaugeSet};
pub use metric::{MetricKind, MetricSpec};
pub use series::{MetricSeries, Sample};
