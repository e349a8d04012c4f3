use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    assert_eq!(MemoryStorage::default().load(), None);
}

#[test]
fn memory_storage_save_then_load() {
    let storage = MemoryStorage::default();
    storage.save("user");
    assert_eq!(storage.load().as_deref(), Some("user"));
}

#[test]
fn memory_storage_save_overwrites() {
    let storage = MemoryStorage::with_value("first");
    storage.save("second");
    assert_eq!(storage.load().as_deref(), Some("second"));
}

#[test]
fn memory_storage_remove_clears_and_is_repeatable() {
    let storage = MemoryStorage::with_value("user");
    storage.remove();
    assert_eq!(storage.load(), None);
    storage.remove();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_clones_share_slot() {
    let storage = MemoryStorage::default();
    let reloaded = storage.clone();
    storage.save("user");
    assert_eq!(reloaded.load().as_deref(), Some("user"));
}

// =============================================================
// BrowserStorage (non-hydrate builds)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_hydrate() {
    let storage = BrowserStorage::new(SESSION_STORAGE_KEY);
    storage.save("user");
    assert_eq!(storage.load(), None);
    storage.remove();
    assert_eq!(storage.load(), None);
}

#[test]
fn session_storage_key_is_stable() {
    assert_eq!(SESSION_STORAGE_KEY, "anscer_auth_user");
    assert_eq!(BrowserStorage::new(SESSION_STORAGE_KEY), BrowserStorage::new("anscer_auth_user"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn default_backend_is_memory_without_hydrate() {
    let backend = default_backend();
    assert_eq!(backend.load(), None);
    backend.save("user");
    assert_eq!(backend.load().as_deref(), Some("user"));
}
