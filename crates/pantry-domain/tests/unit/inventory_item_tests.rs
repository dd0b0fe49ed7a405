//! Tests for the inventory item entity and its stored record

use pantry_domain::entities::inventory_item::quantity_fields;
use pantry_domain::{Category, DocumentFields, Error, InventoryItem, ItemRecord};
use serde_json::json;

fn fields(value: serde_json::Value) -> DocumentFields {
    value.as_object().cloned().expect("object literal")
}

#[test]
fn test_category_labels_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_label(category.as_str()), Some(category));
    }
    assert_eq!(Category::ALL.len(), 7);
}

#[test]
fn test_category_parse_is_case_insensitive() {
    assert_eq!("spices".parse::<Category>().unwrap(), Category::Spices);
    assert_eq!(" Beverage ".parse::<Category>().unwrap(), Category::Beverage);
    assert!(matches!(
        "Frozen".parse::<Category>(),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_empty_or_unknown_label_is_unset() {
    assert_eq!(Category::from_label(""), None);
    assert_eq!(Category::from_label("Dairy"), None);
}

#[test]
fn test_record_decodes_full_document() {
    let record = ItemRecord::from_fields(
        "Flour",
        &fields(json!({"quantity": 3, "category": "Baking", "description": "00 type"})),
    )
    .unwrap();

    assert_eq!(record.quantity, 3);
    assert_eq!(record.category, Some(Category::Baking));
    assert_eq!(record.description, "00 type");
}

#[test]
fn test_record_defaults_optional_fields() {
    let record = ItemRecord::from_fields("Salt", &fields(json!({"quantity": 1}))).unwrap();
    assert_eq!(record.category, None);
    assert_eq!(record.description, "");
}

#[test]
fn test_record_accepts_integral_floats() {
    let record = ItemRecord::from_fields("Rice", &fields(json!({"quantity": 4.0}))).unwrap();
    assert_eq!(record.quantity, 4);
}

#[test]
fn test_record_requires_quantity() {
    let err = ItemRecord::from_fields("Rice", &fields(json!({"category": "Baking"}))).unwrap_err();
    match err {
        Error::InvalidDocument { key, message } => {
            assert_eq!(key, "Rice");
            assert!(message.contains("quantity"));
        }
        other => panic!("Expected InvalidDocument, got {other:?}"),
    }
}

#[test]
fn test_record_rejects_non_integer_quantity() {
    assert!(ItemRecord::from_fields("Rice", &fields(json!({"quantity": "two"}))).is_err());
    assert!(ItemRecord::from_fields("Rice", &fields(json!({"quantity": 1.5}))).is_err());
}

#[test]
fn test_record_to_fields_writes_all_three() {
    let record = ItemRecord {
        quantity: 2,
        category: None,
        description: "tin".to_string(),
    };
    assert_eq!(
        record.to_fields(),
        fields(json!({"quantity": 2, "category": "", "description": "tin"}))
    );
}

#[test]
fn test_quantity_fields_only_touch_quantity() {
    assert_eq!(quantity_fields(5), fields(json!({"quantity": 5})));
}

#[test]
fn test_display_name_capitalizes_first_character() {
    let item = InventoryItem {
        name: "brown sugar".to_string(),
        quantity: 1,
        category: None,
        description: String::new(),
    };
    assert_eq!(item.display_name(), "Brown sugar");
    assert_eq!(item.name, "brown sugar");
}
