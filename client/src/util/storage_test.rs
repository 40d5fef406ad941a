use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_round_trips_values() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_overwrites_existing_value() {
    let store = MemoryStorage::new();
    store.set("k", "old").unwrap();
    store.set("k", "new").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("new"));
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let store = MemoryStorage::new();
    assert!(store.remove("missing").is_ok());
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let view = store.clone();
    store.set("k", "v").unwrap();
    assert_eq!(view.get("k").as_deref(), Some("v"));
    view.remove("k").unwrap();
    assert!(store.entries().is_empty());
}

#[test]
fn memory_storage_rejects_configured_key() {
    let store = MemoryStorage::rejecting_writes_to("blocked");
    assert!(matches!(store.set("blocked", "v"), Err(StorageError::Write { key }) if key == "blocked"));
    assert!(store.set("other", "v").is_ok());
    assert_eq!(store.get("blocked"), None);
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_without_window_is_empty_and_read_only() {
    let store = BrowserStorage;
    assert_eq!(store.get("auth-token"), None);
    assert!(matches!(store.set("auth-token", "t"), Err(StorageError::Unavailable)));
    assert!(store.remove("auth-token").is_ok());
}
