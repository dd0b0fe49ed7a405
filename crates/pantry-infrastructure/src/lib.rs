//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Provider selection and controller wiring |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::build_controller;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
