//! Tests for key lock providers

use pantry_application::ports::KeyLockProvider;
use pantry_providers::lock::{LocalKeyLockProvider, NullKeyLockProvider};
use std::time::Duration;

#[tokio::test]
async fn test_local_lock_excludes_same_key() {
    let locks = LocalKeyLockProvider::new();
    let guard = locks.acquire("Salt").await.unwrap();
    assert!(guard.is_held());
    assert_eq!(guard.key(), "Salt");

    let waiting = tokio::time::timeout(Duration::from_millis(50), locks.acquire("Salt")).await;
    assert!(waiting.is_err(), "second acquire should wait");

    drop(guard);
    let again = tokio::time::timeout(Duration::from_millis(50), locks.acquire("Salt")).await;
    assert!(again.is_ok(), "lock should be free after drop");
}

#[tokio::test]
async fn test_local_lock_does_not_block_other_keys() {
    let locks = LocalKeyLockProvider::new();
    let _salt = locks.acquire("Salt").await.unwrap();
    let pepper = tokio::time::timeout(Duration::from_millis(50), locks.acquire("Pepper")).await;
    assert!(pepper.is_ok());
    assert_eq!(locks.tracked_keys(), 2);
}

#[tokio::test]
async fn test_null_lock_never_waits() {
    let locks = NullKeyLockProvider::new();
    let first = locks.acquire("Salt").await.unwrap();
    let second = locks.acquire("Salt").await.unwrap();
    assert!(!first.is_held());
    assert!(!second.is_held());
    assert_eq!(locks.provider_name(), "null");
}

#[tokio::test]
async fn test_released_keys_are_evicted() {
    let locks = LocalKeyLockProvider::new();
    for i in 0..1_000 {
        let guard = locks.acquire(&format!("item-{i}")).await.unwrap();
        drop(guard);
    }
    assert_eq!(locks.tracked_keys(), 0);
}

#[tokio::test]
async fn test_key_kept_while_waiter_pending() {
    let locks = LocalKeyLockProvider::new();
    let first = locks.acquire("Salt").await.unwrap();

    let contender = locks.clone();
    let waiter = tokio::spawn(async move {
        let guard = contender.acquire("Salt").await.unwrap();
        drop(guard);
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    drop(first);
    assert_eq!(locks.tracked_keys(), 1, "waiter still references the mutex");

    waiter.await.unwrap();
    assert_eq!(locks.tracked_keys(), 0);
}

#[tokio::test]
async fn test_relocking_after_eviction_still_excludes() {
    let locks = LocalKeyLockProvider::new();
    drop(locks.acquire("Salt").await.unwrap());
    assert_eq!(locks.tracked_keys(), 0);

    let guard = locks.acquire("Salt").await.unwrap();
    let waiting = tokio::time::timeout(Duration::from_millis(50), locks.acquire("Salt")).await;
    assert!(waiting.is_err(), "second acquire should wait");
    drop(guard);
}

#[tokio::test]
async fn test_release_hook_runs_with_key() {
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    let guard = pantry_application::ports::KeyLockGuard::unlocked("Pepper")
        .on_release(move |key| sink.lock().unwrap().push(key.to_string()));
    assert!(seen.lock().unwrap().is_empty());

    drop(guard);
    assert_eq!(*seen.lock().unwrap(), vec!["Pepper".to_string()]);
}
