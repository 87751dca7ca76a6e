//! Metric time series

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value_objects::ValueBounds;

/// A single observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Observation instant
    pub timestamp: DateTime<Utc>,
    /// Observed value
    pub value: f64,
}

impl Sample {
    /// Create a sample
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered samples of one metric with a nominal spacing
///
/// Timestamps are strictly increasing. Real data may have gaps; the nominal
/// `step` is what forecasts extend by.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    samples: Vec<Sample>,
    step: TimeDelta,
}

impl MetricSeries {
    /// Build a series from samples, validating their order
    pub fn new(samples: Vec<Sample>, step: TimeDelta) -> Result<Self> {
        if step <= TimeDelta::zero() {
            return Err(Error::invalid_argument("series step must be positive"));
        }
        if let Some(pos) = samples
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(Error::invalid_argument(format!(
                "sample timestamps must be strictly increasing (index {})",
                pos + 1
            )));
        }
        Ok(Self { samples, step })
    }

    /// Build an evenly spaced series starting at `start`
    pub fn regular<I>(start: DateTime<Utc>, step: TimeDelta, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        if step <= TimeDelta::zero() {
            return Err(Error::invalid_argument("series step must be positive"));
        }
        let samples = values
            .into_iter()
            .scan(start, |timestamp, value| {
                let sample = Sample::new(*timestamp, value);
                *timestamp += step;
                Some(sample)
            })
            .collect();
        Ok(Self { samples, step })
    }

    /// Samples in timestamp order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Nominal spacing between samples
    pub fn step(&self) -> TimeDelta {
        self.step
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamp of the last sample
    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.samples.last().map(|s| s.timestamp)
    }

    /// Instant `steps` nominal steps after the last sample
    pub fn horizon(&self, steps: usize) -> Option<DateTime<Utc>> {
        let steps = i32::try_from(steps).ok()?;
        self.last_timestamp().map(|last| last + self.step * steps)
    }

    /// Iterate over the values
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    /// Apply `f` to every value, keeping timestamps
    pub fn map_values<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        for sample in &mut self.samples {
            sample.value = f(sample.value);
        }
        self
    }

    /// Clamp every value into `bounds`
    pub fn clamped(self, bounds: &ValueBounds) -> Self {
        self.map_values(|v| bounds.clamp(v))
    }

    /// Consume the series, returning its samples
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}
