//! Inventory Repository Use Case
//!
//! Inventory rules layered on a keyed document store: upsert-by-name on add,
//! signed quantity deltas, and deletion instead of storing a quantity of zero
//! or below.
//!
//! Every mutation is one read followed by one write (or delete). The read
//! always completes before the write is issued. Whether two mutations on the
//! same key may interleave is decided by the injected [`KeyLockProvider`].

use crate::ports::infrastructure::KeyLockProvider;
use async_trait::async_trait;
use pantry_domain::constants::{INITIAL_QUANTITY, INVENTORY_COLLECTION};
use pantry_domain::entities::inventory_item::quantity_fields;
use pantry_domain::entities::{Category, InventoryItem, ItemRecord};
use pantry_domain::error::{Error, Result};
use pantry_domain::ports::providers::DocumentStoreProvider;
use pantry_domain::repositories::InventoryRepository;
use pantry_domain::value_objects::WriteMode;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Inventory repository over a [`DocumentStoreProvider`]
pub struct DocumentInventoryRepository {
    store: Arc<dyn DocumentStoreProvider>,
    locks: Arc<dyn KeyLockProvider>,
    collection: String,
}

impl DocumentInventoryRepository {
    /// Create a repository over the default `inventory` collection
    pub fn new(store: Arc<dyn DocumentStoreProvider>, locks: Arc<dyn KeyLockProvider>) -> Self {
        Self::with_collection(store, locks, INVENTORY_COLLECTION)
    }

    /// Create a repository over a named collection
    pub fn with_collection(
        store: Arc<dyn DocumentStoreProvider>,
        locks: Arc<dyn KeyLockProvider>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            store,
            locks,
            collection: collection.into(),
        }
    }

    /// Collection this repository reads and writes
    pub fn collection(&self) -> &str {
        &self.collection
    }

    async fn read_record(&self, name: &str) -> Result<Option<ItemRecord>> {
        let fields = self.store.get(&self.collection, name).await?;
        debug!(
            collection = %self.collection,
            item = name,
            found = fields.is_some(),
            "Read inventory record"
        );
        fields
            .map(|fields| ItemRecord::from_fields(name, &fields))
            .transpose()
    }
}

#[async_trait]
impl InventoryRepository for DocumentInventoryRepository {
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>> {
        let documents = self.store.list_all(&self.collection).await?;
        let total = documents.len();

        let items: Vec<InventoryItem> = documents
            .into_iter()
            .filter_map(|doc| match ItemRecord::from_fields(&doc.key, &doc.fields) {
                Ok(record) if record.quantity > 0 => {
                    Some(InventoryItem::from_record(doc.key, record))
                }
                Ok(record) => {
                    warn!(
                        item = %doc.key,
                        quantity = record.quantity,
                        "Skipping stored item with non-positive quantity"
                    );
                    None
                }
                Err(e) => {
                    warn!(item = %doc.key, error = %e, "Skipping malformed inventory document");
                    None
                }
            })
            .collect();

        debug!(
            collection = %self.collection,
            listed = items.len(),
            skipped = total - items.len(),
            "Listed inventory"
        );
        Ok(items)
    }

    async fn add_or_increment(
        &self,
        name: &str,
        category: Option<Category>,
        description: &str,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::invalid_name(name));
        }

        let _guard = self.locks.acquire(name).await?;

        let (quantity, mode) = match self.read_record(name).await? {
            Some(existing) => (existing.quantity.saturating_add(1), WriteMode::Merge),
            None => (INITIAL_QUANTITY, WriteMode::Replace),
        };

        let record = ItemRecord {
            quantity,
            category,
            description: description.to_string(),
        };
        self.store
            .upsert(&self.collection, name, record.to_fields(), mode)
            .await?;

        info!(item = name, quantity, ?category, "Added inventory item");
        Ok(())
    }

    async fn apply_quantity_delta(&self, name: &str, delta: i64) -> Result<()> {
        let _guard = self.locks.acquire(name).await?;

        let Some(existing) = self.read_record(name).await? else {
            debug!(item = name, delta, "Quantity change on missing item ignored");
            return Ok(());
        };

        let quantity = existing.quantity.saturating_add(delta);
        if quantity <= 0 {
            self.store.delete(&self.collection, name).await?;
            info!(item = name, delta, "Removed inventory item");
        } else {
            self.store
                .upsert(
                    &self.collection,
                    name,
                    quantity_fields(quantity),
                    WriteMode::Merge,
                )
                .await?;
            info!(item = name, delta, quantity, "Updated item quantity");
        }
        Ok(())
    }
}
