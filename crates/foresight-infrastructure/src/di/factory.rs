//! Provider factory
//!
//! Maps configuration sections onto port implementations. Every HTTP provider
//! shares the client built by the caller.

use std::sync::Arc;

use foresight_application::SyntheticHistoryGenerator;
use foresight_domain::ports::{ForecastModel, MetricHistorySource, MetricsPublisher};
use foresight_providers::forecast::AdditiveModel;
use foresight_providers::history::{NullHistorySource, PrometheusHistorySource};
use foresight_providers::publish::{NullMetricsPublisher, PushgatewayPublisher};
use reqwest::Client;

use crate::config::{AppConfig, HistorySourceMode};

/// History source for the configured mode
pub fn history_source(config: &AppConfig, client: &Client) -> Arc<dyn MetricHistorySource> {
    match config.history.source {
        HistorySourceMode::Prometheus => Arc::new(PrometheusHistorySource::new(
            config.prometheus.url.clone(),
            config.prometheus.timeout(),
            client.clone(),
        )),
        HistorySourceMode::Synthetic => Arc::new(NullHistorySource::new()),
    }
}

/// Generator for fallback histories
pub fn synthetic_generator(config: &AppConfig) -> SyntheticHistoryGenerator {
    let history = &config.history;
    let generator = SyntheticHistoryGenerator::new(
        history.pattern,
        history.synthetic_lookback(),
        history.step(),
    );
    match history.seed {
        Some(seed) => generator.with_seed(seed),
        None => generator,
    }
}

/// Forecast model with the configured tuning
pub fn forecast_model(config: &AppConfig) -> Arc<dyn ForecastModel> {
    Arc::new(AdditiveModel::new(config.model.clone()))
}

/// Publisher, or a logging stand-in when pushing is disabled
pub fn publisher(config: &AppConfig, client: &Client) -> Arc<dyn MetricsPublisher> {
    if config.pushgateway.enabled {
        Arc::new(PushgatewayPublisher::new(
            config.pushgateway.url.clone(),
            config.pushgateway.timeout(),
            client.clone(),
        ))
    } else {
        Arc::new(NullMetricsPublisher::new())
    }
}
