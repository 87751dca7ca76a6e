//! Scheduling and history configuration

use std::time::Duration;

use chrono::TimeDelta;
use foresight_application::{HistorySettings, SyntheticPattern};
use foresight_domain::constants::{MIN_FORECAST_SAMPLES, SAMPLE_STEP_SECS};
use serde::{Deserialize, Serialize};

use crate::constants::{BASELINE_LOOKBACK_SECS, OBSERVED_INTERVAL_SECS, QUERY_LOOKBACK_SECS};

/// Cycle schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Seconds between the starts of two cycles
    pub interval_secs: u64,
}

impl ScheduleConfig {
    /// Cycle period
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: OBSERVED_INTERVAL_SECS,
        }
    }
}

/// Where histories are read from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistorySourceMode {
    /// Query Prometheus, generate only when it cannot deliver
    #[default]
    Prometheus,
    /// Never query, always generate
    Synthetic,
}

/// History provisioning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// History source
    pub source: HistorySourceMode,
    /// Window queried from the source (seconds)
    pub query_lookback_secs: u64,
    /// Window of generated histories (seconds)
    pub synthetic_lookback_secs: u64,
    /// Sample spacing (seconds)
    pub step_secs: u64,
    /// Shape of generated histories
    pub pattern: SyntheticPattern,
    /// Clamp history values into the metric bounds before fitting
    pub clamp_history: bool,
    /// Fewest observed samples accepted before generating instead
    pub min_samples: usize,
    /// Fixed RNG seed for reproducible generated histories
    pub seed: Option<u64>,
}

impl HistoryConfig {
    /// Query window length
    pub fn query_lookback(&self) -> TimeDelta {
        secs_to_delta(self.query_lookback_secs)
    }

    /// Generated window length
    pub fn synthetic_lookback(&self) -> TimeDelta {
        secs_to_delta(self.synthetic_lookback_secs)
    }

    /// Sample spacing
    pub fn step(&self) -> TimeDelta {
        secs_to_delta(self.step_secs)
    }

    /// Settings for the application-layer history provider
    pub fn settings(&self) -> HistorySettings {
        HistorySettings {
            query_lookback: self.query_lookback(),
            step: self.step(),
            clamp_history: self.clamp_history,
            min_samples: self.min_samples,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            source: HistorySourceMode::Prometheus,
            query_lookback_secs: QUERY_LOOKBACK_SECS,
            synthetic_lookback_secs: BASELINE_LOOKBACK_SECS,
            step_secs: SAMPLE_STEP_SECS.unsigned_abs(),
            pattern: SyntheticPattern::Baseline,
            clamp_history: false,
            min_samples: MIN_FORECAST_SAMPLES,
            seed: None,
        }
    }
}

/// Saturating seconds to `TimeDelta`; validation rejects absurd values first
fn secs_to_delta(secs: u64) -> TimeDelta {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}
