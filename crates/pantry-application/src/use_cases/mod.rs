//! Use Cases
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`DocumentInventoryRepository`] | Inventory rules over a document store |
//! | [`InventoryController`] | Snapshot, query and form state for a UI |

/// Inventory repository backed by a document store
pub mod inventory_service;
/// View-state controller
pub mod view_controller;

pub use inventory_service::DocumentInventoryRepository;
pub use view_controller::{AddItemForm, InventoryController, ViewState};
