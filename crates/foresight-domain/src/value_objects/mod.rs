//! Value Objects
//!
//! Immutable values compared by content rather than identity.

/// Valid value domains and clamping
pub mod bounds;
/// Forecast points and bounded forecast results
pub mod forecast;
/// Range query windows
pub mod query;

pub use bounds::ValueBounds;
pub use forecast::{ForecastPoint, ForecastResult};
pub use query::QueryWindow;
