use opticvault::store::fs::FsStore;
use opticvault::store::KeyValueStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsStore) {
    let dir = TempDir::new().unwrap();
    let store = FsStore::new(dir.path().join("vault"));
    (dir, store)
}

#[test]
fn test_fs_store_basic_io() {
    let (_dir, store) = setup();

    // 1. Write
    store.set("vaultItems", "[]").unwrap();

    // 2. Read
    assert_eq!(store.get("vaultItems").unwrap(), Some("[]".to_string()));

    // 3. Remove
    store.remove("vaultItems").unwrap();
    assert_eq!(store.get("vaultItems").unwrap(), None);

    // 4. Removing again is fine
    store.remove("vaultItems").unwrap();
}

#[test]
fn test_fs_store_atomic_write_artifacts() {
    let (_dir, store) = setup();

    store.set("appAppearanceMode", "dark").unwrap();
    store.set("appAppearanceMode", "light").unwrap();

    let expected_path = store.root().join("appAppearanceMode");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "light");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(store.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_store_keys_are_independent() {
    let (_dir, store) = setup();

    store.set("vaultItems", "[1]").unwrap();
    store.set("appAppearanceMode", "dark").unwrap();
    store.remove("vaultItems").unwrap();

    assert_eq!(store.get("vaultItems").unwrap(), None);
    assert_eq!(
        store.get("appAppearanceMode").unwrap(),
        Some("dark".to_string())
    );
}

#[test]
fn test_fs_store_unreadable_value_is_an_error() {
    let (_dir, store) = setup();
    fs::create_dir_all(store.root().join("vaultItems")).unwrap();

    // A directory where a value file should be cannot be read as text.
    let err = store.get("vaultItems").unwrap_err();
    assert!(err.is_storage());
}
