//! Value bounds for metric domains

use serde::{Deserialize, Serialize};

use crate::constants::{METRIC_VALUE_FLOOR, PERCENTAGE_CEILING};
use crate::error::{Error, Result};

/// Closed range a metric value must lie in
///
/// `upper = None` means the domain is unbounded above (throughput metrics).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    /// Smallest valid value
    pub lower: f64,
    /// Largest valid value, if any
    #[serde(default)]
    pub upper: Option<f64>,
}

impl ValueBounds {
    /// Create bounds, rejecting non-finite or inverted limits
    pub fn new(lower: f64, upper: Option<f64>) -> Result<Self> {
        let bounds = Self { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    /// `[0, 100]`, used by usage and percentage metrics
    pub fn percentage() -> Self {
        Self {
            lower: METRIC_VALUE_FLOOR,
            upper: Some(PERCENTAGE_CEILING),
        }
    }

    /// `[0, +inf)`, used by throughput metrics
    pub fn non_negative() -> Self {
        Self {
            lower: METRIC_VALUE_FLOOR,
            upper: None,
        }
    }

    /// Check that the limits are finite and ordered
    pub fn validate(&self) -> Result<()> {
        if !self.lower.is_finite() {
            return Err(Error::invalid_argument(format!(
                "lower bound must be finite, got {}",
                self.lower
            )));
        }
        if let Some(upper) = self.upper {
            if !upper.is_finite() || upper < self.lower {
                return Err(Error::invalid_argument(format!(
                    "upper bound {} must be finite and >= lower bound {}",
                    upper, self.lower
                )));
            }
        }
        Ok(())
    }

    /// Bring a value into the domain
    ///
    /// NaN maps to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        let floored = value.max(self.lower);
        match self.upper {
            Some(upper) => floored.min(upper),
            None => floored,
        }
    }
}

impl Default for ValueBounds {
    fn default() -> Self {
        Self::percentage()
    }
}
