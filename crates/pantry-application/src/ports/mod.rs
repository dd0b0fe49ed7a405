//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **infrastructure/** - Infrastructure services (per-key locking)

/// Infrastructure service ports
pub mod infrastructure;

pub use infrastructure::{KeyLockGuard, KeyLockProvider};
