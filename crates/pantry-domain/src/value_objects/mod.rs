//! Domain Value Objects
//!
//! Immutable value objects exchanged with the document store boundary.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Document`] | A keyed field set as enumerated from a collection |
//! | [`DocumentFields`] | Untyped field map of a single document |
//! | [`WriteMode`] | Merge or replace semantics for an upsert |

/// Document value objects for the store boundary
pub mod document;

pub use document::{Document, DocumentFields, WriteMode};
