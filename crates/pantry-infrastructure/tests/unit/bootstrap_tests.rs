//! Composition root tests

use pantry_domain::entities::Category;
use pantry_infrastructure::bootstrap::{
    build_controller, build_lock_provider, build_repository, build_store,
};
use pantry_infrastructure::config::{AppConfig, StoreConfig, StoreProviderKind};
use std::path::Path;

fn memory_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.store.provider = StoreProviderKind::Memory;
    config
}

fn filesystem_config(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.store.provider = StoreProviderKind::Filesystem;
    config.store.data_dir = Some(dir.to_path_buf());
    config
}

#[test]
fn test_lock_provider_selection() {
    assert_eq!(build_lock_provider(true).provider_name(), "local");
    assert_eq!(build_lock_provider(false).provider_name(), "null");
}

#[tokio::test]
async fn test_build_memory_store() {
    let store = build_store(&memory_config().store).await.unwrap();
    assert_eq!(store.provider_name(), "memory");
}

#[tokio::test]
async fn test_build_filesystem_store_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("nested").join("data");
    let config = StoreConfig {
        provider: StoreProviderKind::Filesystem,
        collection: "inventory".to_string(),
        data_dir: Some(data_dir.clone()),
    };

    let store = build_store(&config).await.unwrap();
    assert_eq!(store.provider_name(), "filesystem");
    assert!(data_dir.is_dir());
}

#[tokio::test]
async fn test_memory_controller_round_trip() {
    let mut controller = build_controller(&memory_config()).await.unwrap();
    controller.mount().await.unwrap();
    assert!(controller.snapshot().is_empty());

    controller
        .submit_new_item("rice", Some(Category::Baking), "basmati")
        .await
        .unwrap();
    controller.increment("rice").await.unwrap();

    assert_eq!(controller.visible().len(), 1);
    assert_eq!(controller.visible()[0].quantity, 2);
}

#[tokio::test]
async fn test_filesystem_inventory_survives_rebuild() {
    let dir = tempfile::tempdir().unwrap();
    let config = filesystem_config(dir.path());

    let mut first = build_controller(&config).await.unwrap();
    first.mount().await.unwrap();
    first.submit_new_item("tea", None, "").await.unwrap();
    first.submit_new_item("tea", None, "").await.unwrap();

    let mut second = build_controller(&config).await.unwrap();
    second.mount().await.unwrap();
    assert_eq!(second.snapshot().len(), 1);
    assert_eq!(second.snapshot()[0].name, "tea");
    assert_eq!(second.snapshot()[0].quantity, 2);
    assert!(dir.path().join("inventory.json").exists());
}

#[tokio::test]
async fn test_repository_uses_configured_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = filesystem_config(dir.path());
    config.store.collection = "freezer".to_string();

    let repository = build_repository(&config).await.unwrap();
    repository
        .add_or_increment("peas", Some(Category::Vegetables), "")
        .await
        .unwrap();

    assert!(dir.path().join("freezer.json").exists());
    assert!(!dir.path().join("inventory.json").exists());
}

#[tokio::test]
async fn test_filesystem_store_requires_data_dir() {
    let config = StoreConfig {
        provider: StoreProviderKind::Filesystem,
        collection: "inventory".to_string(),
        data_dir: None,
    };

    let result = build_store(&config).await;
    assert!(matches!(
        result,
        Err(pantry_domain::error::Error::Configuration { .. })
    ));
}
