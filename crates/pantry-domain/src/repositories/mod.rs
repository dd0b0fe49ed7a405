//! Repository Interfaces
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`InventoryRepository`] | Inventory listing and quantity mutations |

/// Inventory repository interface
pub mod inventory_repository;

pub use inventory_repository::InventoryRepository;
