//! # Domain Layer
//!
//! Core types for metric forecasting: time series, forecasts, gauges and the
//! ports through which the application talks to the outside world.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`entities`] | Metric series, metric specifications and the gauge set |
//! | [`value_objects`] | Bounds, forecast points and query windows |
//! | [`ports`] | Provider interfaces (history source, forecast model, publisher) |
//! | [`constants`] | Domain constants |
//! | [`error`] | Domain error types |
//!
//! ## Example
//!
//! ```ignore
//! use foresight_domain::value_objects::ValueBounds;
//!
//! let bounds = ValueBounds::percentage();
//! assert_eq!(bounds.clamp(150.0), 100.0);
//! ```

/// Domain-level constants
pub mod constants;
/// Core business entities
pub mod entities;
/// Domain error types
pub mod error;
/// Provider ports
pub mod ports;
/// Immutable value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use constants::*;
pub use entities::*;
pub use error::{Error, Result};
pub use value_objects::*;
