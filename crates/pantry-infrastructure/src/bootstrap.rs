//! Composition root
//!
//! Turns an [`AppConfig`] into a ready [`InventoryController`]:
//!
//! ```text
//! AppConfig → DocumentStoreProvider ─┐
//!           → KeyLockProvider ───────┴→ DocumentInventoryRepository → InventoryController
//! ```

use crate::config::{AppConfig, StoreConfig, StoreProviderKind};
use pantry_application::ports::KeyLockProvider;
use pantry_application::use_cases::{DocumentInventoryRepository, InventoryController};
use pantry_domain::error::{Error, Result};
use pantry_domain::ports::providers::DocumentStoreProvider;
use pantry_domain::repositories::InventoryRepository;
use pantry_providers::document_store::{
    FilesystemDocumentStore, FilesystemDocumentStoreConfig, InMemoryDocumentStore,
};
use pantry_providers::lock::{LocalKeyLockProvider, NullKeyLockProvider};
use std::sync::Arc;
use tracing::info;

/// Create the document store selected by `store.provider`
pub async fn build_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStoreProvider>> {
    let store: Arc<dyn DocumentStoreProvider> = match config.provider {
        StoreProviderKind::Memory => Arc::new(InMemoryDocumentStore::new()),
        StoreProviderKind::Filesystem => {
            let base_path = config.data_dir.clone().ok_or_else(|| {
                Error::configuration("store.data_dir is required for the filesystem provider")
            })?;
            Arc::new(FilesystemDocumentStore::new(FilesystemDocumentStoreConfig { base_path }).await?)
        }
    };
    info!(provider = store.provider_name(), "Document store ready");
    Ok(store)
}

/// Create the key lock provider for mutation sequences
pub fn build_lock_provider(serialize_per_key: bool) -> Arc<dyn KeyLockProvider> {
    if serialize_per_key {
        Arc::new(LocalKeyLockProvider::new())
    } else {
        Arc::new(NullKeyLockProvider::new())
    }
}

/// Create the inventory repository over the configured store and collection
pub async fn build_repository(config: &AppConfig) -> Result<Arc<dyn InventoryRepository>> {
    let store = build_store(&config.store).await?;
    let locks = build_lock_provider(config.concurrency.serialize_per_key);
    info!(
        collection = %config.store.collection,
        locks = locks.provider_name(),
        "Inventory repository ready"
    );
    Ok(Arc::new(DocumentInventoryRepository::with_collection(
        store,
        locks,
        config.store.collection.clone(),
    )))
}

/// Create an unmounted controller for the configured inventory
pub async fn build_controller(config: &AppConfig) -> Result<InventoryController> {
    Ok(InventoryController::new(build_repository(config).await?))
}
