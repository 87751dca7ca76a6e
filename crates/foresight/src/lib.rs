//! # Foresight
//!
//! Forecasts disk, CPU, memory and network utilization 15 minutes ahead from
//! recent Prometheus history and pushes the predictions to a Pushgateway.
//!
//! ## Example
//!
//! ```ignore
//! use foresight::infrastructure::{AppConfig, Preset, init_app};
//!
//! let mut context = init_app(AppConfig::for_preset(Preset::Synthetic))?;
//! let report = context.run_cycle(chrono::Utc::now()).await;
//! println!("{} forecasts stored", report.published());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, ports and the error type
//! - `application` - history provisioning, the prediction cycle, scheduling
//! - `providers` - Prometheus, Pushgateway and the forecast model
//! - `infrastructure` - configuration, logging, bootstrap

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use foresight_domain::*;
}

/// Application layer - use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use foresight_application::*;
}

/// Providers - port implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use foresight_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use foresight_infrastructure::*;
}

pub mod init;

pub use init::{run, write_config};
