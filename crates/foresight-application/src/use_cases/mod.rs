//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`PredictionCycle`] | Forecast every metric and push the gauge set |
//! | [`run_schedule`] | Drive a [`crate::ScheduledTask`] from a [`crate::Ticker`] |

/// Predict-and-publish cycle
pub mod prediction_cycle;
/// Scheduling loop
pub mod scheduler;

pub use prediction_cycle::{CycleReport, MetricOutcome, PredictionCycle, PushOutcome};
pub use scheduler::run_schedule;
