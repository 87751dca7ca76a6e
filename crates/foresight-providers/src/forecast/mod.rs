//! Forecast model implementations
//!
//! | Model | Description |
//! |-------|-------------|
//! | [`AdditiveModel`] | Piecewise-linear trend plus daily Fourier seasonality, MAP fit |

pub mod additive;
mod linalg;

pub use additive::{AdditiveModel, AdditiveModelSettings};
