//! Range query windows

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::{Error, Result};

/// Inclusive `[start, end]` window sampled every `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    /// First instant of the window
    pub start: DateTime<Utc>,
    /// Last instant of the window
    pub end: DateTime<Utc>,
    /// Resolution of the window
    pub step: TimeDelta,
}

impl QueryWindow {
    /// Window of length `lookback` that ends at `end`
    pub fn ending_at(end: DateTime<Utc>, lookback: TimeDelta, step: TimeDelta) -> Result<Self> {
        if step <= TimeDelta::zero() {
            return Err(Error::invalid_argument("query step must be positive"));
        }
        if lookback < step {
            return Err(Error::invalid_argument(format!(
                "lookback {lookback} is shorter than one step {step}"
            )));
        }
        Ok(Self {
            start: end - lookback,
            end,
            step,
        })
    }

    /// Length of the window
    pub fn lookback(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Number of step-aligned instants in the window, both ends included
    pub fn expected_samples(&self) -> usize {
        let steps = self.lookback().num_milliseconds() / self.step.num_milliseconds();
        usize::try_from(steps).unwrap_or(0) + 1
    }
}
