//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`InventoryItem`] | A named item with a positive quantity |
//! | [`ItemRecord`] | Typed view of the fields stored for one item |
//! | [`Category`] | Fixed set of item categories |

/// Inventory item entity and its stored record
pub mod inventory_item;

pub use inventory_item::{Category, InventoryItem, ItemRecord};
