//! Document Store Provider Port
//!
//! Thin contract over a remote keyed document collection. Implementations
//! perform no retries: transport failures surface as
//! [`Error::StoreUnavailable`](crate::error::Error::StoreUnavailable).

use crate::error::Result;
use crate::value_objects::{Document, DocumentFields, WriteMode};
use async_trait::async_trait;

/// Keyed document collection interface
///
/// # Example
///
/// ```ignore
/// use pantry_domain::ports::providers::DocumentStoreProvider;
/// use pantry_domain::value_objects::WriteMode;
///
/// store.upsert("inventory", "Flour", fields, WriteMode::Merge).await?;
/// if let Some(fields) = store.get("inventory", "Flour").await? {
///     println!("{fields:?}");
/// }
/// store.delete("inventory", "Flour").await?;
/// ```
#[async_trait]
pub trait DocumentStoreProvider: Send + Sync {
    /// Enumerate every document in a collection
    ///
    /// Returns an empty vector when the collection has no records. Order is
    /// provider-defined and must be treated as arbitrary.
    async fn list_all(&self, collection: &str) -> Result<Vec<Document>>;

    /// Fetch one document's fields, `None` when the key does not exist
    async fn get(&self, collection: &str, key: &str) -> Result<Option<DocumentFields>>;

    /// Write a document
    ///
    /// [`WriteMode::Merge`] overwrites only the given fields (creating the
    /// record if absent); [`WriteMode::Replace`] stores exactly `fields`.
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        fields: DocumentFields,
        mode: WriteMode,
    ) -> Result<()>;

    /// Remove a document; removing an absent key is not an error
    async fn delete(&self, collection: &str, key: &str) -> Result<()>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}
