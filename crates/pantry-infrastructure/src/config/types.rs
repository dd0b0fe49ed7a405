//! Configuration types

use crate::constants::{DEFAULT_CONFIG_DIR, DEFAULT_LOG_LEVEL, FALLBACK_DATA_DIR};
use pantry_domain::constants::INVENTORY_COLLECTION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Document store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Mutation concurrency configuration
    #[serde(default)]
    pub concurrency: ConcurrencyConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Available document store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProviderKind {
    /// Process-local maps, nothing persisted
    Memory,
    /// JSON files under `data_dir`
    Filesystem,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use
    pub provider: StoreProviderKind,

    /// Collection holding inventory records
    pub collection: String,

    /// Root directory for the filesystem backend
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProviderKind::Filesystem,
            collection: INVENTORY_COLLECTION.to_string(),
            data_dir: Some(default_data_dir()),
        }
    }
}

/// Mutation concurrency configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcurrencyConfig {
    /// Run read-modify-write sequences on the same item one at a time
    pub serialize_per_key: bool,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            serialize_per_key: true,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(DEFAULT_CONFIG_DIR))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}
