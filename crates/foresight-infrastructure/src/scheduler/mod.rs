//! Scheduling infrastructure
//!
//! Wall-clock implementations of the application's scheduling ports.

pub mod ticker;

pub use ticker::IntervalTicker;
