//! Application Layer - Pantry
//!
//! Use cases and orchestration for the inventory tracker, following the same
//! Clean Architecture split as the rest of the workspace.
//!
//! ## Use Cases
//!
//! - [`DocumentInventoryRepository`]: inventory rules on top of a document store
//! - [`InventoryController`]: view state driven by user actions
//!
//! ## Domain Services
//!
//! - [`filter_inventory`]: search filtering over the in-memory snapshot
//!
//! ## Ports (Interfaces)
//!
//! - `ports::infrastructure::lock`: per-key mutual exclusion for mutations
//!
//! ## Dependencies
//!
//! This crate depends only on `pantry-domain` and pure Rust libraries.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
