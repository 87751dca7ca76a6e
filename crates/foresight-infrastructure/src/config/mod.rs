//! Configuration management
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Configuration sections and presets |
//! | [`loader`] | Figment layering and validation |

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
