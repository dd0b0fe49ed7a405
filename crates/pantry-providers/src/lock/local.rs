//! In-process per-key lock provider
//!
//! Hands out one async mutex per key. Mutations on different keys never
//! wait on each other; mutations on the same key run one at a time, in the
//! order they asked for the lock. A key's mutex is evicted from the map once
//! its last guard is released and nobody is waiting on it.

use async_trait::async_trait;
use dashmap::DashMap;
use pantry_application::ports::infrastructure::{KeyLockGuard, KeyLockProvider};
use pantry_domain::error::Result;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::trace;

/// Per-key lock provider backed by a map of async mutexes
#[derive(Clone, Default)]
pub struct LocalKeyLockProvider {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl LocalKeyLockProvider {
    /// Create a provider with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held or waited on
    pub fn tracked_keys(&self) -> usize {
        self.locks.len()
    }
}

#[async_trait]
impl KeyLockProvider for LocalKeyLockProvider {
    async fn acquire(&self, key: &str) -> Result<KeyLockGuard> {
        // Clone the Arc out so no map shard stays locked across the await.
        let mutex = self.locks.entry(key.to_string()).or_default().clone();
        let permit = mutex.lock_owned().await;
        trace!(key, "Key lock acquired");

        let locks = Arc::clone(&self.locks);
        Ok(KeyLockGuard::held(key, permit).on_release(move |key| {
            // Only the map's own reference left: no holder, no waiter.
            locks.remove_if(key, |_, mutex| Arc::strong_count(mutex) == 1);
        }))
    }

    fn provider_name(&self) -> &str {
        "local"
    }
}
