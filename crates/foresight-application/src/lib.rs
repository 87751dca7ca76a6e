//! Application Layer - Foresight
//!
//! Use cases and orchestration for the forecasting pipeline, following the
//! same layering as the rest of the workspace.
//!
//! ## Pipeline
//!
//! ```text
//! HistoryProvider -> ForecastModel -> ValueBounds::clamp -> GaugeSet -> MetricsPublisher
//! ```
//!
//! ## Modules
//!
//! - `domain_services::*`: history provisioning and synthetic generators
//! - `use_cases::*`: the prediction cycle and the scheduling loop
//! - `ports::*`: scheduling interfaces (`Ticker`, `ScheduledTask`)
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `foresight-domain`: entities, value objects and provider ports
//! - Pure Rust libraries for async, randomness, etc.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
