//! Prediction Cycle Use Case
//!
//! One cycle forecasts every configured metric in order, stores each bounded
//! forecast in the gauge set, then pushes the whole set in one batch. Nothing
//! in here aborts the cycle: query failures fall back to synthetic history,
//! fit failures skip one metric, push failures are logged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use foresight_domain::constants::FORECAST_HORIZON_STEPS;
use foresight_domain::entities::{GaugeSet, MetricSpec};
use foresight_domain::error::{Error, Result};
use foresight_domain::ports::{ForecastModel, MetricsPublisher};
use foresight_domain::value_objects::ForecastResult;
use tracing::{error, info, warn};

use crate::domain_services::history::{HistoryOrigin, HistoryProvider};

/// Result of one metric within a cycle
#[derive(Debug, Clone, PartialEq)]
pub enum MetricOutcome {
    /// The forecast was stored in the gauge set
    Published {
        /// Bounded forecast
        forecast: ForecastResult,
        /// Provenance of the history it was fitted on
        origin: HistoryOrigin,
    },
    /// The gauge was left untouched
    Skipped {
        /// Gauge name of the metric
        metric: String,
        /// Why the metric was skipped
        reason: String,
    },
}

impl MetricOutcome {
    /// Gauge name of the metric
    pub fn metric(&self) -> &str {
        match self {
            Self::Published { forecast, .. } => &forecast.metric,
            Self::Skipped { metric, .. } => metric,
        }
    }

    /// Whether the forecast was stored
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}

/// Result of the batch push
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The collector accepted the batch
    Pushed,
    /// The push failed; gauges are unaffected
    Failed(String),
}

/// Summary of a completed cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    /// One entry per configured metric, in configuration order
    pub outcomes: Vec<MetricOutcome>,
    /// Push result
    pub push: PushOutcome,
}

impl CycleReport {
    /// Number of metrics stored in the gauge set
    pub fn published(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_published()).count()
    }

    /// Number of metrics skipped
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.published()
    }
}

/// Predict-and-publish cycle over a fixed list of metrics
pub struct PredictionCycle {
    history: HistoryProvider,
    model: Arc<dyn ForecastModel>,
    publisher: Arc<dyn MetricsPublisher>,
    metrics: Vec<MetricSpec>,
    job_name: String,
}

impl PredictionCycle {
    /// Create a cycle with injected dependencies
    pub fn new(
        history: HistoryProvider,
        model: Arc<dyn ForecastModel>,
        publisher: Arc<dyn MetricsPublisher>,
        metrics: Vec<MetricSpec>,
        job_name: impl Into<String>,
    ) -> Self {
        Self {
            history,
            model,
            publisher,
            metrics,
            job_name: job_name.into(),
        }
    }

    /// Metrics forecast by this cycle
    pub fn metrics(&self) -> &[MetricSpec] {
        &self.metrics
    }

    /// Gauge set with one declared gauge per metric
    pub fn declare_gauges(&self) -> GaugeSet {
        GaugeSet::from_specs(&self.metrics)
    }

    /// Run one cycle for the window ending at `now`
    pub async fn run(&self, gauges: &mut GaugeSet, now: DateTime<Utc>) -> CycleReport {
        info!(metrics = self.metrics.len(), "Starting prediction cycle");

        let mut outcomes = Vec::with_capacity(self.metrics.len());
        for spec in &self.metrics {
            outcomes.push(self.predict_and_store(spec, gauges, now).await);
        }

        let push = match self.publisher.push(&self.job_name, gauges).await {
            Ok(()) => {
                info!(
                    job = %self.job_name,
                    publisher = self.publisher.publisher_name(),
                    "All predictions pushed to gateway"
                );
                PushOutcome::Pushed
            }
            Err(e) => {
                error!(job = %self.job_name, error = %e, "Could not push to gateway");
                PushOutcome::Failed(e.to_string())
            }
        };

        CycleReport { outcomes, push }
    }

    async fn predict_and_store(
        &self,
        spec: &MetricSpec,
        gauges: &mut GaugeSet,
        now: DateTime<Utc>,
    ) -> MetricOutcome {
        info!(metric = %spec.label, "Analyzing metric");
        match self.predict(spec, now).await {
            Ok((forecast, origin)) => {
                if let Err(e) = gauges.set(&spec.name, forecast.value) {
                    error!(metric = %spec.label, error = %e, "Could not store forecast");
                    return MetricOutcome::Skipped {
                        metric: spec.name.clone(),
                        reason: e.to_string(),
                    };
                }
                info!(
                    metric = %spec.label,
                    forecast = %format!("{:.2}", forecast.value),
                    raw = forecast.raw_value,
                    clamped = forecast.was_clamped(),
                    history = %origin,
                    "Forecast stored"
                );
                MetricOutcome::Published { forecast, origin }
            }
            Err(e) => {
                match &e {
                    Error::FitFailed { .. } => {
                        warn!(metric = %spec.label, error = %e, "Error predicting metric, keeping previous value")
                    }
                    _ => {
                        error!(metric = %spec.label, error = %e, "Error predicting metric, keeping previous value")
                    }
                }
                MetricOutcome::Skipped {
                    metric: spec.name.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn predict(
        &self,
        spec: &MetricSpec,
        now: DateTime<Utc>,
    ) -> Result<(ForecastResult, HistoryOrigin)> {
        let history = self.history.history(spec, now).await?;
        let point = self.model.forecast(&history.series, FORECAST_HORIZON_STEPS)?;
        Ok((
            ForecastResult::bounded(&spec.name, point, &spec.bounds),
            history.origin,
        ))
    }
}
