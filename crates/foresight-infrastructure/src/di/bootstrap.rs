//! Application Bootstrap
//!
//! Builds the application context once at start-up: HTTP client, providers,
//! history provider, prediction cycle and the gauge set the cycle writes to.
//!
//! ```text
//! AppConfig → factory → ports → HistoryProvider → PredictionCycle
//!                                                      ↓
//!                                          AppContext { gauges }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut context = init_app(config)?;
//! let report = context.run_cycle(Utc::now()).await;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use foresight_application::{
    CycleReport, HistoryProvider, PredictionCycle, PushOutcome, ScheduledTask,
};
use foresight_domain::entities::GaugeSet;
use foresight_domain::error::Result;
use foresight_providers::http::HttpClientConfig;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;
use crate::di::factory;

/// Application context
///
/// Owns the configuration, the prediction cycle and the gauge set. Gauges
/// survive across cycles; nothing else does.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    cycle: PredictionCycle,
    gauges: GaugeSet,
}

impl AppContext {
    /// The prediction cycle
    pub fn cycle(&self) -> &PredictionCycle {
        &self.cycle
    }

    /// Latest forecast per gauge
    pub fn gauges(&self) -> &GaugeSet {
        &self.gauges
    }

    /// Run one predict-and-publish cycle for the window ending at `now`
    pub async fn run_cycle(&mut self, now: DateTime<Utc>) -> CycleReport {
        let report = self.cycle.run(&mut self.gauges, now).await;
        debug!(
            published = report.published(),
            skipped = report.skipped(),
            pushed = matches!(report.push, PushOutcome::Pushed),
            "Cycle report"
        );
        report
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("preset", &self.config.preset)
            .field("metrics", &self.cycle.metrics().len())
            .field("gauges", &self.gauges)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ScheduledTask for AppContext {
    async fn run_once(&mut self) {
        self.run_cycle(Utc::now()).await;
    }

    fn task_name(&self) -> &str {
        "prediction-cycle"
    }
}

/// Initialize the application context
///
/// Validates the configuration again so contexts built from hand-assembled
/// configurations obey the same rules as loaded ones.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    validate_app_config(&config)?;
    info!(
        preset = %config.preset,
        source = ?config.history.source,
        pushgateway = config.pushgateway.enabled,
        metrics = config.metrics.len(),
        "Initializing application context"
    );

    let timeout = config
        .prometheus
        .timeout()
        .max(config.pushgateway.timeout());
    let client = HttpClientConfig::with_timeout(timeout).build_client()?;

    let history = HistoryProvider::new(
        factory::history_source(&config, &client),
        factory::synthetic_generator(&config),
        config.history.settings(),
    );
    let cycle = PredictionCycle::new(
        history,
        factory::forecast_model(&config),
        factory::publisher(&config, &client),
        config.metrics.clone(),
        config.pushgateway.job.clone(),
    );
    let gauges = cycle.declare_gauges();

    Ok(AppContext {
        config: Arc::new(config),
        cycle,
        gauges,
    })
}
