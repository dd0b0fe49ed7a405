//! Null lock provider
//!
//! Grants every request immediately. Two read-modify-write sequences on the
//! same key can interleave and one update can be lost.

use async_trait::async_trait;
use pantry_application::ports::infrastructure::{KeyLockGuard, KeyLockProvider};
use pantry_domain::error::Result;

/// Lock provider that excludes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKeyLockProvider;

impl NullKeyLockProvider {
    /// Create a new null lock provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeyLockProvider for NullKeyLockProvider {
    async fn acquire(&self, key: &str) -> Result<KeyLockGuard> {
        Ok(KeyLockGuard::unlocked(key))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
