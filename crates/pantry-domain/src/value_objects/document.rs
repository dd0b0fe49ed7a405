//! Document value objects
//!
//! The store adapter speaks in untyped field maps so that merge writes can
//! touch individual fields. Typed decoding happens in
//! [`crate::entities::ItemRecord`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field map of a single stored document
pub type DocumentFields = Map<String, Value>;

/// A document as returned by a full collection listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document key, unique within its collection
    pub key: String,

    /// Stored fields
    pub fields: DocumentFields,
}

impl Document {
    /// Create a new Document instance
    pub fn new(key: impl Into<String>, fields: DocumentFields) -> Self {
        Self {
            key: key.into(),
            fields,
        }
    }
}

/// How an upsert treats an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Overwrite only the given fields, creating the record if absent
    Merge,
    /// Discard the existing record and store exactly the given fields
    Replace,
}

impl WriteMode {
    /// Apply this mode to an optional existing field set
    ///
    /// Store providers share this so merge semantics stay identical across
    /// backends.
    pub fn apply(self, existing: Option<DocumentFields>, fields: DocumentFields) -> DocumentFields {
        match (self, existing) {
            (Self::Merge, Some(mut current)) => {
                current.extend(fields);
                current
            }
            _ => fields,
        }
    }
}
