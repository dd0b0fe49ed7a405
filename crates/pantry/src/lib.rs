//! # Pantry
//!
//! Household inventory tracker: named items with a quantity, an optional
//! category and a description, kept in a keyed document store.
//!
//! ## Architecture
//!
//! - `domain` - entities, errors and the document store port
//! - `application` - inventory repository, search filter and view controller
//! - `providers` - in-memory and filesystem stores, key lock providers
//! - `infrastructure` - configuration, logging and wiring
//! - [`cli`] - the `pantry` command line
//!
//! ## Example
//!
//! ```ignore
//! use pantry::infrastructure::{AppConfig, build_controller};
//!
//! let mut controller = build_controller(&AppConfig::default()).await?;
//! controller.mount().await?;
//! controller.submit_new_item("Rice", Some(Category::Baking), "").await?;
//! ```

/// Domain layer - entities, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use pantry_domain::*;
}

/// Application layer - use cases and application ports
pub mod application {
    pub use pantry_application::*;
}

/// Provider implementations
pub mod providers {
    pub use pantry_providers::*;
}

/// Infrastructure layer - config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use pantry_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the controller at the crate root
pub use application::use_cases::{InventoryController, ViewState};
