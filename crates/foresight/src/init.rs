//! Process start-up and the main loop
//!
//! Loads configuration, installs logging, builds the application context
//! and drives it from an interval ticker until a shutdown signal arrives.

use std::path::Path;

use chrono::Utc;
use foresight_application::run_schedule;
use foresight_infrastructure::config::{AppConfig, ConfigLoader, Preset};
use foresight_infrastructure::di::init_app;
use foresight_infrastructure::logging::init_logging;
use foresight_infrastructure::scheduler::IntervalTicker;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Run Foresight
///
/// Only start-up failures are returned; once the loop runs, errors are
/// logged and the next cycle proceeds. With `once` set a single cycle runs
/// and the function returns.
pub async fn run(
    config_path: Option<&Path>,
    preset: Option<Preset>,
    once: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path, preset)?;
    init_logging(&config.logging)?;

    let interval = config.schedule.interval();
    info!(
        preset = %config.preset,
        interval = %humantime::format_duration(interval),
        prometheus = %config.prometheus.url,
        pushgateway = %config.pushgateway.url,
        "Starting Foresight"
    );

    let mut context = init_app(config)?;

    if once {
        let report = context.run_cycle(Utc::now()).await;
        info!(
            published = report.published(),
            skipped = report.skipped(),
            "Single cycle finished"
        );
        return Ok(());
    }

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(shutdown.clone()));

    let mut ticker = IntervalTicker::new(interval);
    let cycles = run_schedule(&mut ticker, &mut context, &shutdown).await;
    info!(cycles, "Foresight stopped");
    Ok(())
}

/// Write the effective configuration to `output` as TOML
///
/// Resolves the same layers `run` would, so the file reflects the preset,
/// the configuration file and any `FORESIGHT_*` overrides.
pub fn write_config(
    config_path: Option<&Path>,
    preset: Option<Preset>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path, preset)?;
    ConfigLoader::save_to_file(&config, output)?;
    Ok(())
}

/// Load configuration from optional path and preset
fn load_config(
    config_path: Option<&Path>,
    preset: Option<Preset>,
) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    if let Some(preset) = preset {
        loader = loader.with_preset(preset);
    }
    Ok(loader.load()?)
}

/// Cancel `token` on Ctrl-C, or SIGTERM on Unix
async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    info!("Received shutdown signal, stopping after the current cycle");
    token.cancel();
}
