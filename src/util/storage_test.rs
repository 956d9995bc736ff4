use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), None);

    storage.set("token", "abc123").unwrap();
    assert_eq!(storage.get("token").as_deref(), Some("abc123"));
    assert_eq!(storage.writes(), 1);

    storage.remove("token");
    assert_eq!(storage.get("token"), None);
}

#[test]
fn memory_storage_clones_share_state() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("token", "t1").unwrap();
    assert_eq!(b.get("token").as_deref(), Some("t1"));
}

#[test]
fn memory_storage_seed_is_not_a_write() {
    let storage = MemoryStorage::with_entry("token", "abc123");
    assert_eq!(storage.get("token").as_deref(), Some("abc123"));
    assert_eq!(storage.writes(), 0);
}

#[test]
fn memory_storage_failed_write_leaves_map_untouched() {
    let storage = MemoryStorage::new();
    storage.fail_writes(true);
    assert!(matches!(storage.set("token", "abc"), Err(StorageError::Write(_))));
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.writes(), 0);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_outside_browser_is_empty() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.set("token", "abc"), Err(StorageError::Unavailable));
    storage.remove("token");
}
