//! Filesystem document store implementation
//!
//! Each collection is a single pretty-printed JSON object mapping document
//! keys to their fields, stored as `<base_path>/<collection>.json`. Keys are
//! kept sorted so listings are stable. Every write replaces the whole file
//! through a temporary file and a rename, so readers never observe a
//! half-written collection.

use crate::constants::{COLLECTION_FILE_EXTENSION, COLLECTION_TEMP_SUFFIX, FILESYSTEM_STORE_NAME};
use async_trait::async_trait;
use pantry_domain::error::{Error, Result};
use pantry_domain::ports::providers::DocumentStoreProvider;
use pantry_domain::value_objects::{Document, DocumentFields, WriteMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// Stored form of one collection
type CollectionFile = BTreeMap<String, DocumentFields>;

/// Filesystem document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemDocumentStoreConfig {
    /// Directory holding one file per collection
    pub base_path: PathBuf,
}

impl Default for FilesystemDocumentStoreConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./data"),
        }
    }
}

/// Filesystem document store
pub struct FilesystemDocumentStore {
    config: FilesystemDocumentStoreConfig,
    /// Serializes load-modify-save cycles within this process
    write_lock: Mutex<()>,
}

// File utility helpers
mod file_utils {
    use pantry_domain::error::{Error, Result};
    use std::path::Path;

    pub async fn exists(path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    pub async fn read_to_string(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::store_unavailable_with_source(format!("Failed to read {}", path.display()), e)
        })
    }

    pub async fn write_atomic(path: &Path, tmp: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::store_unavailable_with_source(
                    format!("Failed to create directory {}", parent.display()),
                    e,
                )
            })?;
        }
        tokio::fs::write(tmp, data).await.map_err(|e| {
            Error::store_unavailable_with_source(format!("Failed to write {}", tmp.display()), e)
        })?;
        tokio::fs::rename(tmp, path).await.map_err(|e| {
            Error::store_unavailable_with_source(
                format!("Failed to move {} into place", tmp.display()),
                e,
            )
        })
    }
}

impl FilesystemDocumentStore {
    /// Create a new filesystem document store, creating the base directory
    pub async fn new(config: FilesystemDocumentStoreConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.base_path)
            .await
            .map_err(|e| {
                Error::store_unavailable_with_source(
                    format!(
                        "Failed to create base directory {}",
                        config.base_path.display()
                    ),
                    e,
                )
            })?;

        Ok(Self {
            config,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the collection files
    pub fn base_path(&self) -> &Path {
        &self.config.base_path
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf> {
        if collection.is_empty()
            || collection.contains(['/', '\\'])
            || collection.starts_with('.')
        {
            return Err(Error::invalid_argument(format!(
                "Invalid collection name: {collection:?}"
            )));
        }
        Ok(self
            .config
            .base_path
            .join(format!("{collection}.{COLLECTION_FILE_EXTENSION}")))
    }

    async fn load(&self, path: &Path) -> Result<CollectionFile> {
        if !file_utils::exists(path).await {
            return Ok(CollectionFile::new());
        }
        let content = file_utils::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| {
            Error::store_unavailable_with_source(
                format!("Collection file {} is corrupt", path.display()),
                e,
            )
        })
    }

    async fn save(&self, path: &Path, docs: &CollectionFile) -> Result<()> {
        let content = serde_json::to_vec_pretty(docs)?;
        let tmp = path.with_extension(format!(
            "{COLLECTION_FILE_EXTENSION}.{COLLECTION_TEMP_SUFFIX}"
        ));
        file_utils::write_atomic(path, &tmp, &content).await?;
        debug!(path = %path.display(), documents = docs.len(), "Saved collection");
        Ok(())
    }
}

#[async_trait]
impl DocumentStoreProvider for FilesystemDocumentStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>> {
        let path = self.collection_path(collection)?;
        Ok(self
            .load(&path)
            .await?
            .into_iter()
            .map(|(key, fields)| Document::new(key, fields))
            .collect())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<DocumentFields>> {
        let path = self.collection_path(collection)?;
        Ok(self.load(&path).await?.remove(key))
    }

    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        fields: DocumentFields,
        mode: WriteMode,
    ) -> Result<()> {
        let path = self.collection_path(collection)?;
        let _guard = self.write_lock.lock().await;

        let mut docs = self.load(&path).await?;
        let existing = docs.remove(key);
        docs.insert(key.to_string(), mode.apply(existing, fields));
        self.save(&path, &docs).await
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<()> {
        let path = self.collection_path(collection)?;
        let _guard = self.write_lock.lock().await;

        let mut docs = self.load(&path).await?;
        if docs.remove(key).is_none() {
            return Ok(());
        }
        self.save(&path, &docs).await
    }

    fn provider_name(&self) -> &str {
        FILESYSTEM_STORE_NAME
    }
}
