//! External Service Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`DocumentStoreProvider`] | Remote keyed document collection |

/// Document store provider port
pub mod document_store;

pub use document_store::DocumentStoreProvider;
