//! Foresight - Entry Point
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Observed** | `foresight` | Forecast from Prometheus every minute |
//! | **Synthetic** | `foresight --preset synthetic` | Forecast generated histories every 30 s |
//! | **Single cycle** | `foresight --once` | One cycle, then exit |
//! | **Write config** | `foresight --write-config foresight.toml` | Save the effective configuration, then exit |

use clap::Parser;
use foresight::infrastructure::Preset;
use foresight::{run, write_config};

/// Command line interface for Foresight
#[derive(Parser, Debug)]
#[command(name = "foresight")]
#[command(about = "Foresight - Utilization forecasts for Prometheus Pushgateway")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Configuration preset (observed or synthetic)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Run a single cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Write the effective configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Some(output) = cli.write_config.as_deref() {
        return write_config(cli.config.as_deref(), cli.preset, output);
    }
    run(cli.config.as_deref(), cli.preset, cli.once).await
}
