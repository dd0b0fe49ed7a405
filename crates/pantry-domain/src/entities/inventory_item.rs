//! Inventory item entity
//!
//! An item is identified by its name, which is also the document key in the
//! store. Names are kept exactly as entered: "Salt" and "salt" are two items.

use crate::constants::{FIELD_CATEGORY, FIELD_DESCRIPTION, FIELD_QUANTITY};
use crate::error::{Error, Result};
use crate::value_objects::DocumentFields;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Flour, sugar, yeast
    Baking,
    /// Drinks
    Beverage,
    /// Salt, pepper, dried herbs
    Spices,
    /// Chips, crackers
    Snacks,
    /// Condiments and sauces
    Sauce,
    /// Fresh or dried fruit
    Fruits,
    /// Fresh or frozen vegetables
    Vegetables,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 7] = [
        Category::Baking,
        Category::Beverage,
        Category::Spices,
        Category::Snacks,
        Category::Sauce,
        Category::Fruits,
        Category::Vegetables,
    ];

    /// Label used in stored documents
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baking => "Baking",
            Self::Beverage => "Beverage",
            Self::Spices => "Spices",
            Self::Snacks => "Snacks",
            Self::Sauce => "Sauce",
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
        }
    }

    /// Decode a stored label; empty or unknown labels mean "unset"
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_argument(format!("Unknown category: {s}")))
    }
}

/// An item in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique name, also the document key
    pub name: String,

    /// Number of units on hand, always positive for stored items
    pub quantity: i64,

    /// Category, if one was chosen
    pub category: Option<Category>,

    /// Free-text description, possibly empty
    pub description: String,
}

impl InventoryItem {
    /// Build an item from its key and decoded record
    pub fn from_record(name: impl Into<String>, record: ItemRecord) -> Self {
        Self {
            name: name.into(),
            quantity: record.quantity,
            category: record.category,
            description: record.description,
        }
    }

    /// Name with its first character upper-cased, as shown in listings
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Typed record of the fields stored for one item
///
/// Documents are validated here, at the adapter boundary: `quantity` is
/// required, `category` and `description` default to unset/empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Stored quantity
    pub quantity: i64,
    /// Stored category
    pub category: Option<Category>,
    /// Stored description
    pub description: String,
}

impl ItemRecord {
    /// Decode a document's fields
    ///
    /// `key` only feeds the error message.
    pub fn from_fields(key: &str, fields: &DocumentFields) -> Result<Self> {
        let quantity = match fields.get(FIELD_QUANTITY) {
            Some(value) => quantity_from_value(value).ok_or_else(|| {
                Error::invalid_document(key, format!("quantity is not an integer: {value}"))
            })?,
            None => return Err(Error::invalid_document(key, "missing quantity")),
        };

        let category = fields
            .get(FIELD_CATEGORY)
            .and_then(Value::as_str)
            .and_then(Category::from_label);

        let description = fields
            .get(FIELD_DESCRIPTION)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            quantity,
            category,
            description,
        })
    }

    /// Encode all fields for a full write
    pub fn to_fields(&self) -> DocumentFields {
        let mut fields = quantity_fields(self.quantity);
        fields.insert(
            FIELD_CATEGORY.to_string(),
            Value::String(self.category.map(Category::as_str).unwrap_or_default().to_string()),
        );
        fields.insert(
            FIELD_DESCRIPTION.to_string(),
            Value::String(self.description.clone()),
        );
        fields
    }
}

/// Field set carrying only a quantity, for merge writes
pub fn quantity_fields(quantity: i64) -> DocumentFields {
    let mut fields = DocumentFields::new();
    fields.insert(FIELD_QUANTITY.to_string(), Value::from(quantity));
    fields
}

// Stores that keep numbers as doubles hand back 3.0 for 3.
#[allow(clippy::cast_possible_truncation)]
fn quantity_from_value(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
            .map(|f| f as i64)
    })
}
