//! Configuration loader
//!
//! Handles loading configuration from preset defaults, TOML files and
//! environment variables, in that order of precedence (later wins).

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use foresight_domain::error::{Error, Result};

use crate::config::{AppConfig, Preset};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Largest accepted window or interval (one year)
const MAX_DURATION_SECS: u64 = 365 * 24 * 3600;

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Preset forced by the caller, overriding the file and environment
    preset: Option<Preset>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            preset: None,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Force a preset
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Defaults of the preset (`AppConfig::for_preset`)
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `FORESIGHT_PUSHGATEWAY__URL`)
    ///
    /// The preset itself is resolved first from the caller, the file or the
    /// environment, in that order of priority.
    pub fn load(&self) -> Result<AppConfig> {
        let overrides = self.overrides();

        let preset = match self.preset {
            Some(preset) => preset,
            None => {
                if overrides.contains("preset") {
                    overrides
                        .extract_inner::<Preset>("preset")
                        .context("Invalid preset")?
                } else {
                    Preset::default()
                }
            }
        };

        let mut figment =
            Figment::new().merge(Serialized::defaults(AppConfig::for_preset(preset)));
        figment = figment.merge(overrides);
        // The resolved preset is authoritative over what the layers said
        figment = figment.merge(Serialized::default("preset", preset));

        let app_config: AppConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file as TOML
    pub fn save_to_file<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// File and environment layers
    fn overrides(&self) -> Figment {
        let mut figment = Figment::new();

        let path = match &self.config_path {
            Some(path) => Some(path.clone()),
            None => Self::find_default_config_path(),
        };
        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                log_config_loaded(&path, true);
            } else {
                log_config_loaded(&path, false);
            }
        }

        figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        )
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_endpoints(config)?;
    validate_schedule(config)?;
    validate_history(config)?;
    validate_model(config)?;
    validate_metrics(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_endpoints(config: &AppConfig) -> Result<()> {
    if config.prometheus.url.trim().is_empty() {
        return Err(Error::configuration("Prometheus URL cannot be empty"));
    }
    if config.prometheus.timeout_secs == 0 {
        return Err(Error::configuration("Prometheus timeout cannot be 0"));
    }
    let gateway = &config.pushgateway;
    if gateway.enabled && gateway.url.trim().is_empty() {
        return Err(Error::configuration(
            "Pushgateway URL cannot be empty when pushing is enabled",
        ));
    }
    if gateway.timeout_secs == 0 {
        return Err(Error::configuration("Pushgateway timeout cannot be 0"));
    }
    if gateway.job.trim().is_empty() {
        return Err(Error::configuration("Pushgateway job name cannot be empty"));
    }
    if gateway.job.contains('/') {
        return Err(Error::configuration(format!(
            "Pushgateway job name '{}' cannot contain '/'",
            gateway.job
        )));
    }
    Ok(())
}

fn validate_schedule(config: &AppConfig) -> Result<()> {
    let interval = config.schedule.interval_secs;
    if interval == 0 || interval > MAX_DURATION_SECS {
        return Err(Error::configuration(format!(
            "Schedule interval must be between 1 and {MAX_DURATION_SECS} seconds, got {interval}"
        )));
    }
    Ok(())
}

fn validate_history(config: &AppConfig) -> Result<()> {
    let history = &config.history;
    if history.step_secs == 0 || history.step_secs > MAX_DURATION_SECS {
        return Err(Error::configuration("History step must be between 1 second and one year"));
    }
    for (name, lookback) in [
        ("query_lookback_secs", history.query_lookback_secs),
        ("synthetic_lookback_secs", history.synthetic_lookback_secs),
    ] {
        if lookback > MAX_DURATION_SECS {
            return Err(Error::configuration(format!(
                "History {name} cannot exceed one year"
            )));
        }
        if lookback < 2 * history.step_secs {
            return Err(Error::configuration(format!(
                "History {name} ({lookback}) must span at least two steps of {} seconds",
                history.step_secs
            )));
        }
    }
    if history.min_samples < 2 {
        return Err(Error::configuration(
            "History min_samples must be at least 2",
        ));
    }
    Ok(())
}

fn validate_model(config: &AppConfig) -> Result<()> {
    config
        .model
        .validate()
        .map_err(|e| Error::configuration(format!("Invalid model settings: {e}")))
}

fn validate_metrics(config: &AppConfig) -> Result<()> {
    if config.metrics.is_empty() {
        return Err(Error::configuration("At least one metric must be configured"));
    }
    let mut seen = std::collections::HashSet::new();
    for spec in &config.metrics {
        spec.validate()
            .map_err(|e| Error::configuration(format!("Invalid metric '{}': {e}", spec.name)))?;
        if !seen.insert(spec.name.as_str()) {
            return Err(Error::configuration(format!(
                "Metric '{}' is configured more than once",
                spec.name
            )));
        }
    }
    Ok(())
}
