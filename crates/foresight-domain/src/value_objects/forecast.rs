//! Forecast value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ValueBounds;

/// Raw model output at a single future instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Instant the prediction refers to
    pub timestamp: DateTime<Utc>,
    /// Predicted value, unbounded
    pub value: f64,
}

/// Forecast ready for publishing
///
/// `value` always lies inside the bounds it was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Gauge name of the forecast metric
    pub metric: String,
    /// Instant the prediction refers to
    pub target: DateTime<Utc>,
    /// Model output before clamping
    pub raw_value: f64,
    /// Clamped value
    pub value: f64,
}

impl ForecastResult {
    /// Clamp a model output into the metric's domain
    pub fn bounded(metric: impl Into<String>, point: ForecastPoint, bounds: &ValueBounds) -> Self {
        Self {
            metric: metric.into(),
            target: point.timestamp,
            raw_value: point.value,
            value: bounds.clamp(point.value),
        }
    }

    /// Whether clamping changed the model output
    pub fn was_clamped(&self) -> bool {
        self.raw_value != self.value
    }
}
