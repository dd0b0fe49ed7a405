//! Inventory Repository Interface
//!
//! Domain operations over the inventory collection. The view controller
//! depends on this trait, not on a concrete store, so it can be driven by
//! any implementation in tests.

use crate::entities::{Category, InventoryItem};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: inventory records keyed by item name
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Every item currently stored, in the store's enumeration order
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>>;

    /// Create `name` with quantity 1, or bump an existing record by one
    ///
    /// `category` and `description` always overwrite the stored values.
    /// Fails with `InvalidName` before touching the store when `name` is
    /// blank.
    async fn add_or_increment(
        &self,
        name: &str,
        category: Option<Category>,
        description: &str,
    ) -> Result<()>;

    /// Add a signed delta to an item's quantity
    ///
    /// A missing item is left alone. A resulting quantity of zero or below
    /// deletes the record.
    async fn apply_quantity_delta(&self, name: &str, delta: i64) -> Result<()>;
}
