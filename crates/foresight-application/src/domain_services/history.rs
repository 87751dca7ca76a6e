//! History provisioning
//!
//! Fetches the recent history of a metric from the configured source and
//! falls back to a synthetic history when the source cannot deliver. Query
//! failures never leave this module.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use foresight_domain::constants::MIN_FORECAST_SAMPLES;
use foresight_domain::entities::{MetricSeries, MetricSpec, Sample};
use foresight_domain::error::{Error, Result};
use foresight_domain::ports::MetricHistorySource;
use foresight_domain::value_objects::QueryWindow;
use tracing::{debug, info};

use super::synthetic::SyntheticHistoryGenerator;

/// Where a history came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOrigin {
    /// Returned by the history source
    Observed,
    /// Generated because the source could not deliver
    Synthetic {
        /// Why the source was not used
        reason: String,
    },
}

impl HistoryOrigin {
    /// Whether the history was generated
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic { .. })
    }
}

impl fmt::Display for HistoryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Observed => f.write_str("observed"),
            Self::Synthetic { .. } => f.write_str("synthetic"),
        }
    }
}

/// History ready for fitting
#[derive(Debug, Clone)]
pub struct MetricHistory {
    /// Samples to fit on
    pub series: MetricSeries,
    /// Provenance of the samples
    pub origin: HistoryOrigin,
}

/// History provider settings
#[derive(Debug, Clone, Copy)]
pub struct HistorySettings {
    /// Length of the window queried from the source
    pub query_lookback: TimeDelta,
    /// Query resolution and nominal series step
    pub step: TimeDelta,
    /// Clamp every value into the metric bounds before fitting
    pub clamp_history: bool,
    /// Fewest observed samples accepted before falling back
    pub min_samples: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            query_lookback: TimeDelta::days(2),
            step: TimeDelta::minutes(5),
            clamp_history: false,
            min_samples: MIN_FORECAST_SAMPLES,
        }
    }
}

/// Provides one history per metric per cycle
pub struct HistoryProvider {
    source: Arc<dyn MetricHistorySource>,
    generator: SyntheticHistoryGenerator,
    settings: HistorySettings,
}

impl HistoryProvider {
    /// Create a provider with injected source and generator
    pub fn new(
        source: Arc<dyn MetricHistorySource>,
        generator: SyntheticHistoryGenerator,
        settings: HistorySettings,
    ) -> Self {
        Self {
            source,
            generator,
            settings,
        }
    }

    /// History of `spec` for the window ending at `now`
    ///
    /// Only a synthetic generation failure is returned as an error; a failing
    /// or empty source always results in a synthetic history.
    pub async fn history(&self, spec: &MetricSpec, now: DateTime<Utc>) -> Result<MetricHistory> {
        let history = match self.observed(spec, now).await {
            Ok(series) => {
                debug!(
                    metric = %spec.label,
                    samples = series.len(),
                    source = self.source.source_name(),
                    "Using observed history"
                );
                MetricHistory {
                    series,
                    origin: HistoryOrigin::Observed,
                }
            }
            Err(Error::QueryUnavailable { message, .. }) => {
                info!(
                    metric = %spec.label,
                    reason = %message,
                    pattern = ?self.generator.pattern(),
                    "Not enough real data, using synthetic history"
                );
                MetricHistory {
                    series: self.generator.generate(spec.kind, &spec.bounds, now)?,
                    origin: HistoryOrigin::Synthetic { reason: message },
                }
            }
            Err(other) => return Err(other),
        };

        if self.settings.clamp_history {
            return Ok(MetricHistory {
                series: history.series.clamped(&spec.bounds),
                origin: history.origin,
            });
        }
        Ok(history)
    }

    /// Query the source and normalize the first usable series
    ///
    /// Every failure is mapped to [`Error::QueryUnavailable`].
    async fn observed(&self, spec: &MetricSpec, now: DateTime<Utc>) -> Result<MetricSeries> {
        let window = QueryWindow::ending_at(now, self.settings.query_lookback, self.settings.step)
            .map_err(|e| Error::query_unavailable(e.to_string()))?;

        let matched = match self.source.query_range(&spec.query, &window).await {
            Ok(matched) => matched,
            Err(e @ Error::QueryUnavailable { .. }) => return Err(e),
            Err(e) => return Err(Error::query_unavailable(e.to_string())),
        };

        let series = matched
            .into_iter()
            .map(|series| finite_samples(series, spec.unit_conversion))
            .find(|samples| !samples.is_empty())
            .ok_or_else(|| Error::query_unavailable("query returned no data"))?;

        if series.len() < self.settings.min_samples {
            return Err(Error::query_unavailable(format!(
                "query returned {} usable samples, need at least {}",
                series.len(),
                self.settings.min_samples
            )));
        }

        MetricSeries::new(series, self.settings.step)
            .map_err(|e| Error::query_unavailable(e.to_string()))
    }
}

/// Convert units and drop NaN / infinite samples
fn finite_samples(series: MetricSeries, unit_conversion: f64) -> Vec<Sample> {
    series
        .into_samples()
        .into_iter()
        .map(|s| Sample::new(s.timestamp, s.value * unit_conversion))
        .filter(|s| s.value.is_finite())
        .collect()
}
