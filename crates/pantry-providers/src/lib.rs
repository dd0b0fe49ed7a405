//! # Pantry - Provider Implementations
//!
//! Concrete adapters for the ports defined in `pantry-domain` and
//! `pantry-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Document Store | `DocumentStoreProvider` | InMemory, Filesystem |
//! | Key Lock | `KeyLockProvider` | Local, Null |
//!
//! ## Usage
//!
//! ```ignore
//! use pantry_providers::document_store::InMemoryDocumentStore;
//! use pantry_providers::lock::LocalKeyLockProvider;
//! ```

// Re-export domain types commonly used with providers
pub use pantry_application::ports::KeyLockProvider;
pub use pantry_domain::error::{Error, Result};
pub use pantry_domain::ports::providers::DocumentStoreProvider;

/// Provider-specific constants
pub mod constants;

/// Document store provider implementations
///
/// Implements `DocumentStoreProvider` for in-process and on-disk backends.
pub mod document_store;

/// Key lock provider implementations
///
/// Implements `KeyLockProvider` for per-key mutation serialization.
pub mod lock;
