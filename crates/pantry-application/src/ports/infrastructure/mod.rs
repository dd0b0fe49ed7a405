//! Infrastructure Service Ports

/// Per-key lock provider port
pub mod lock;

pub use lock::{KeyLockGuard, KeyLockProvider};
