//! Main application configuration

use std::fmt;

use foresight_application::SyntheticPattern;
use foresight_domain::entities::MetricSpec;
use foresight_providers::forecast::AdditiveModelSettings;
use serde::{Deserialize, Serialize};

use super::endpoints::{PrometheusConfig, PushgatewayConfig};
use super::logging::LoggingConfig;
use super::metrics::default_metric_specs;
use super::pipeline::{HistoryConfig, HistorySourceMode, ScheduleConfig};
use crate::constants::{
    SMART_LOOKBACK_SECS, SYNTHETIC_CHANGEPOINT_PRIOR_SCALE, SYNTHETIC_INTERVAL_SECS,
};

/// Named starting point for the configuration
///
/// ```toml
/// preset = "synthetic"
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Forecast from Prometheus history; generate baseline histories only when
    /// it cannot deliver. One cycle per minute, daily seasonality on.
    #[default]
    Observed,
    /// Forecast from generated oscillating histories only. One cycle every
    /// 30 seconds, histories clamped, trend allowed to follow recent change.
    Synthetic,
}

impl Preset {
    /// Lowercase preset name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Observed => "observed",
            Self::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "observed" => Ok(Self::Observed),
            "synthetic" => Ok(Self::Synthetic),
            other => Err(format!(
                "unknown preset '{other}', expected 'observed' or 'synthetic'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preset the defaults were taken from
    pub preset: Preset,
    /// History source endpoint
    pub prometheus: PrometheusConfig,
    /// Publishing endpoint
    pub pushgateway: PushgatewayConfig,
    /// Cycle schedule
    pub schedule: ScheduleConfig,
    /// History provisioning
    pub history: HistoryConfig,
    /// Forecast model tuning
    pub model: AdditiveModelSettings,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Metrics forecast on every cycle
    pub metrics: Vec<MetricSpec>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_preset(Preset::default())
    }
}

impl AppConfig {
    /// Defaults of a preset
    pub fn for_preset(preset: Preset) -> Self {
        let mut config = Self {
            preset,
            prometheus: PrometheusConfig::default(),
            pushgateway: PushgatewayConfig::default(),
            schedule: ScheduleConfig::default(),
            history: HistoryConfig::default(),
            model: AdditiveModelSettings::default(),
            logging: LoggingConfig::default(),
            metrics: default_metric_specs(),
        };

        if preset == Preset::Synthetic {
            config.schedule.interval_secs = SYNTHETIC_INTERVAL_SECS;
            config.history.source = HistorySourceMode::Synthetic;
            config.history.pattern = SyntheticPattern::Smart;
            config.history.synthetic_lookback_secs = SMART_LOOKBACK_SECS;
            config.history.clamp_history = true;
            config.model.daily_seasonality = false;
            config.model.changepoint_prior_scale = SYNTHETIC_CHANGEPOINT_PRIOR_SCALE;
        }
        config
    }
}
