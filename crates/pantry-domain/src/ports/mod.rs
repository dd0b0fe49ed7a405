//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! High-level modules (domain, application) define the interfaces; providers
//! implement them.
//!
//! ## Organization
//!
//! - **providers/** - External service provider ports (document store)

/// External service provider ports
pub mod providers;

pub use providers::DocumentStoreProvider;
