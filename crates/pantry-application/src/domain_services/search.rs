//! Search filter
//!
//! Pure derivation of the visible rows from a snapshot and a query string.

use pantry_domain::entities::InventoryItem;

/// Items whose name contains `query`, ignoring case, in input order
///
/// An empty query keeps every item. Items with an empty name never match.
pub fn filter_inventory(items: &[InventoryItem], query: &str) -> Vec<InventoryItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, &needle))
        .cloned()
        .collect()
}

fn matches_query(item: &InventoryItem, needle: &str) -> bool {
    !item.name.is_empty() && item.name.to_lowercase().contains(needle)
}
