//! Composition root
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`factory`] | Selects provider implementations from configuration |
//! | [`bootstrap`] | Builds the [`AppContext`] once at start-up |

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{AppContext, init_app};
