//! Forecast Model Port

use crate::entities::MetricSeries;
use crate::error::Result;
use crate::value_objects::ForecastPoint;

/// Univariate point forecaster
///
/// Implementations fit on `series` and predict the value `steps_ahead`
/// nominal steps after its last sample. Failures are reported as
/// [`crate::Error::FitFailed`].
pub trait ForecastModel: Send + Sync {
    /// Fit and predict a single future point
    fn forecast(&self, series: &MetricSeries, steps_ahead: usize) -> Result<ForecastPoint>;

    /// Get the name of this model
    fn model_name(&self) -> &str;
}
