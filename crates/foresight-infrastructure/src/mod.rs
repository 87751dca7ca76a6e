//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//! Concrete providers live in `foresight-providers` and are wired here.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Presets, TOML and environment layering with figment |
//! | [`di`] | Provider factory and the application context |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Runtime
//! | Module | Description |
//! |--------|-------------|
//! | [`scheduler`] | Wall-clock ticker for the scheduling loop |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod scheduler;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, Preset};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use scheduler::IntervalTicker;
