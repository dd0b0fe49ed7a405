//! Key Lock Provider Implementations
//!
//! - [`LocalKeyLockProvider`]: one async mutex per key, in process
//! - [`NullKeyLockProvider`]: no exclusion; concurrent mutations may lose updates

pub mod local;
pub mod null;

pub use local::LocalKeyLockProvider;
pub use null::NullKeyLockProvider;
