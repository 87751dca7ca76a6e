//! Application Ports
//!
//! Interfaces owned by the application layer. Provider ports live in
//! `foresight_domain::ports`.

/// Scheduling ports
pub mod scheduling;

pub use scheduling::{ScheduledTask, Ticker};
