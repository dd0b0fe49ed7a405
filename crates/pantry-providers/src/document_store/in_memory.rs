//! In-memory document store provider implementation
//!
//! Keeps collections in concurrent hash maps. Data is not persisted and will
//! be lost on restart. The store can be switched offline, made to reject
//! writes, or given an artificial round-trip latency so tests can exercise
//! the behaviour of a remote store.

use crate::constants::IN_MEMORY_STORE_NAME;
use async_trait::async_trait;
use dashmap::DashMap;
use pantry_domain::error::{Error, Result};
use pantry_domain::ports::providers::DocumentStoreProvider;
use pantry_domain::value_objects::{Document, DocumentFields, WriteMode};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory document store provider
pub struct InMemoryDocumentStore {
    collections: Arc<DashMap<String, HashMap<String, DocumentFields>>>,
    latency: Option<Duration>,
    unavailable: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryDocumentStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
            latency: None,
            unavailable: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    /// Delay every operation by `latency` before it touches the data
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make every operation fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make upserts and deletes fail with `StoreUnavailable`; reads still work
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of upserts and deletes that reached the data
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of documents in a collection
    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, |c| c.len())
    }

    /// Whether a collection holds no documents
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    async fn round_trip(&self, operation: &str) -> Result<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::store_unavailable(format!(
                "in-memory store is offline ({operation})"
            )));
        }
        Ok(())
    }

    async fn write_round_trip(&self, operation: &str) -> Result<()> {
        self.round_trip(operation).await?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::store_unavailable(format!(
                "in-memory store rejected write ({operation})"
            )));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStoreProvider for InMemoryDocumentStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>> {
        self.round_trip("list").await?;
        Ok(self
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, fields)| Document::new(key.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<DocumentFields>> {
        self.round_trip("get").await?;
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(key).cloned()))
    }

    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        fields: DocumentFields,
        mode: WriteMode,
    ) -> Result<()> {
        self.write_round_trip("upsert").await?;
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        let existing = docs.remove(key);
        docs.insert(key.to_string(), mode.apply(existing, fields));
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<()> {
        self.write_round_trip("delete").await?;
        if let Some(mut docs) = self.collections.get_mut(collection) {
            docs.remove(key);
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        IN_MEMORY_STORE_NAME
    }
}
