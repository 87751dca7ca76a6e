//! Domain Services
//!
//! Stateless services used by the prediction cycle.

/// History provisioning with synthetic fallback
pub mod history;
/// Synthetic history generators
pub mod synthetic;

pub use history::{HistoryOrigin, HistoryProvider, HistorySettings, MetricHistory};
pub use synthetic::{SyntheticHistoryGenerator, SyntheticPattern};
