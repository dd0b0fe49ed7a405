//! Infrastructure layer constants
//!
//! Domain-specific constants live in `pantry_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "pantry.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "pantry";

/// Environment variable prefix for configuration (`PANTRY__STORE__PROVIDER`)
pub const CONFIG_ENV_PREFIX: &str = "PANTRY";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Data directory used when no platform data directory is known
pub const FALLBACK_DATA_DIR: &str = "./data";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "PANTRY_LOG";

/// File stem of rolled log files
pub const LOG_FILE_STEM: &str = "pantry";
