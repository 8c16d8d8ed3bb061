use crate::collection;
use crate::commands::VaultKeys;
use crate::model::Item;
use crate::store::KeyValueStore;

/// Snapshot of the whole collection, in insertion order. Never fails: an
/// unreadable vault is reported as empty.
pub fn run<S: KeyValueStore>(store: &S, keys: &VaultKeys) -> Vec<Item> {
    collection::load_or_empty(store, &keys.collection)
}

/// Look up a single item, with the same fail-open read as [`run`].
pub fn find<S: KeyValueStore>(store: &S, keys: &VaultKeys, id: &str) -> Option<Item> {
    run(store, keys).into_iter().find(|item| item.id == id)
}
