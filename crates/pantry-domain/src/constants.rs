//! Domain layer constants

/// Name of the document collection holding inventory records
pub const INVENTORY_COLLECTION: &str = "inventory";

/// Document field holding the item count
pub const FIELD_QUANTITY: &str = "quantity";

/// Document field holding the category label
pub const FIELD_CATEGORY: &str = "category";

/// Document field holding the free-text description
pub const FIELD_DESCRIPTION: &str = "description";

/// Quantity assigned to an item on its first add
pub const INITIAL_QUANTITY: i64 = 1;
