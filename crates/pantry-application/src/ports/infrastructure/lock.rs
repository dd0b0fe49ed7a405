//! Key Lock Provider Port
//!
//! Defines the contract for serializing read-modify-write sequences on the
//! same document key.

use async_trait::async_trait;
use pantry_domain::error::Result;
use std::fmt;
use tokio::sync::OwnedMutexGuard;

/// Callback run once the lock has been released
type ReleaseHook = Box<dyn FnOnce(&str) + Send>;

/// Lock guard returned when a key lock is acquired
///
/// The lock is released when the guard is dropped. A release hook, if set,
/// runs after the mutex guard itself has been dropped.
pub struct KeyLockGuard {
    key: String,
    permit: Option<OwnedMutexGuard<()>>,
    on_release: Option<ReleaseHook>,
}

impl KeyLockGuard {
    /// Guard holding an acquired mutex
    pub fn held(key: impl Into<String>, permit: OwnedMutexGuard<()>) -> Self {
        Self {
            key: key.into(),
            permit: Some(permit),
            on_release: None,
        }
    }

    /// Guard that excludes nothing
    pub fn unlocked(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            permit: None,
            on_release: None,
        }
    }

    /// Run `hook` with the key after the lock is released
    #[must_use]
    pub fn on_release(mut self, hook: impl FnOnce(&str) + Send + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    /// Locked key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this guard actually excludes other holders
    pub fn is_held(&self) -> bool {
        self.permit.is_some()
    }
}

impl Drop for KeyLockGuard {
    fn drop(&mut self) {
        drop(self.permit.take());
        if let Some(hook) = self.on_release.take() {
            hook(&self.key);
        }
    }
}

impl fmt::Debug for KeyLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyLockGuard")
            .field("key", &self.key)
            .field("held", &self.is_held())
            .finish_non_exhaustive()
    }
}

/// Per-key lock provider interface
#[async_trait]
pub trait KeyLockProvider: Send + Sync {
    /// Wait until `key` is free and take it
    async fn acquire(&self, key: &str) -> Result<KeyLockGuard>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}
