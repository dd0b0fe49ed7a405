//! Tests for the filesystem document store

use pantry_domain::ports::providers::DocumentStoreProvider;
use pantry_domain::{DocumentFields, Error, WriteMode};
use pantry_providers::document_store::{FilesystemDocumentStore, FilesystemDocumentStoreConfig};
use serde_json::json;
use tempfile::TempDir;

fn fields(value: serde_json::Value) -> DocumentFields {
    value.as_object().cloned().expect("object literal")
}

async fn create_store(dir: &TempDir) -> FilesystemDocumentStore {
    FilesystemDocumentStore::new(FilesystemDocumentStoreConfig {
        base_path: dir.path().join("data"),
    })
    .await
    .expect("store should be created")
}

#[tokio::test]
async fn test_missing_collection_file_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let store = create_store(&dir).await;
    assert!(store.list_all("inventory").await.unwrap().is_empty());
    assert!(store.base_path().exists());
}

#[tokio::test]
async fn test_documents_persist_across_instances() {
    let dir = TempDir::new().unwrap();
    {
        let store = create_store(&dir).await;
        store
            .upsert(
                "inventory",
                "Sugar",
                fields(json!({"quantity": 2, "category": "Baking", "description": ""})),
                WriteMode::Replace,
            )
            .await
            .unwrap();
    }

    let reopened = create_store(&dir).await;
    let fields_read = reopened.get("inventory", "Sugar").await.unwrap().unwrap();
    assert_eq!(fields_read["quantity"], json!(2));
    assert!(dir.path().join("data/inventory.json").exists());
    assert!(!dir.path().join("data/inventory.json.tmp").exists());
}

#[tokio::test]
async fn test_listing_is_sorted_by_key() {
    let dir = TempDir::new().unwrap();
    let store = create_store(&dir).await;
    for name in ["Sugar", "Flour", "Brown Sugar"] {
        store
            .upsert("inventory", name, fields(json!({"quantity": 1})), WriteMode::Merge)
            .await
            .unwrap();
    }

    let keys: Vec<String> = store
        .list_all("inventory")
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.key)
        .collect();
    assert_eq!(keys, vec!["Brown Sugar", "Flour", "Sugar"]);
}

#[tokio::test]
async fn test_merge_keeps_other_fields() {
    let dir = TempDir::new().unwrap();
    let store = create_store(&dir).await;
    store
        .upsert(
            "inventory",
            "Tea",
            fields(json!({"quantity": 1, "description": "green"})),
            WriteMode::Replace,
        )
        .await
        .unwrap();
    store
        .upsert("inventory", "Tea", fields(json!({"quantity": 3})), WriteMode::Merge)
        .await
        .unwrap();

    assert_eq!(
        store.get("inventory", "Tea").await.unwrap(),
        Some(fields(json!({"quantity": 3, "description": "green"})))
    );
}

#[tokio::test]
async fn test_delete_removes_only_that_key() {
    let dir = TempDir::new().unwrap();
    let store = create_store(&dir).await;
    for name in ["Salt", "Pepper"] {
        store
            .upsert("inventory", name, fields(json!({"quantity": 1})), WriteMode::Merge)
            .await
            .unwrap();
    }

    store.delete("inventory", "Salt").await.unwrap();
    store.delete("inventory", "Salt").await.unwrap();

    let docs = store.list_all("inventory").await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].key, "Pepper");
}

#[tokio::test]
async fn test_corrupt_collection_file_is_store_unavailable() {
    let dir = TempDir::new().unwrap();
    let store = create_store(&dir).await;
    std::fs::write(dir.path().join("data/inventory.json"), "{not json").unwrap();

    let err = store.list_all("inventory").await.unwrap_err();
    assert!(err.is_store_unavailable());
}

#[tokio::test]
async fn test_collection_names_cannot_escape_base_path() {
    let dir = TempDir::new().unwrap();
    let store = create_store(&dir).await;
    for bad in ["", "../etc", ".hidden", "a/b"] {
        assert!(matches!(
            store.list_all(bad).await,
            Err(Error::InvalidArgument { .. })
        ));
    }
}
