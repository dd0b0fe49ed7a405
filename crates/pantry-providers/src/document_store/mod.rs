//! Document Store Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryDocumentStore`] | Local | Concurrent maps, with failure and latency hooks for tests |
//! | [`FilesystemDocumentStore`] | Local | One JSON file per collection, atomic writes |

pub mod filesystem;
pub mod in_memory;

pub use filesystem::{FilesystemDocumentStore, FilesystemDocumentStoreConfig};
pub use in_memory::InMemoryDocumentStore;
