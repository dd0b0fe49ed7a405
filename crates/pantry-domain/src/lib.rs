//! # Pantry Domain
//!
//! Core types and contracts for the inventory tracker.
//!
//! - `entities` - [`InventoryItem`], its stored [`ItemRecord`] and [`Category`]
//! - `value_objects` - store boundary types ([`Document`], [`WriteMode`])
//! - `ports` - provider contracts ([`DocumentStoreProvider`])
//! - `repositories` - the [`InventoryRepository`] contract
//! - `error` - the domain [`Error`] and [`Result`] alias

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{Category, InventoryItem, ItemRecord};
pub use error::{Error, Result};
pub use ports::DocumentStoreProvider;
pub use repositories::InventoryRepository;
pub use value_objects::{Document, DocumentFields, WriteMode};
