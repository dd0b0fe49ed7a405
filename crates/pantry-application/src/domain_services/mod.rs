//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`filter_inventory`] | Case-insensitive name search over a snapshot |

/// Search filtering over the in-memory inventory
pub mod search;

pub use search::filter_inventory;
