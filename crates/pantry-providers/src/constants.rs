//! Provider constants

/// Provider name of the in-memory document store
pub const IN_MEMORY_STORE_NAME: &str = "memory";

/// Provider name of the filesystem document store
pub const FILESYSTEM_STORE_NAME: &str = "filesystem";

/// File extension of a collection file
pub const COLLECTION_FILE_EXTENSION: &str = "json";

/// Suffix of the temporary file written before an atomic rename
pub const COLLECTION_TEMP_SUFFIX: &str = "tmp";
