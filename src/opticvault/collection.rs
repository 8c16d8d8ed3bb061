//! # Collection Encoding
//!
//! The entire vault lives under a single store key as a JSON array of item
//! records, in insertion order. It is always read and written as a whole.
//!
//! Two read paths exist on purpose:
//!
//! - [`load`] is strict. Mutations use it: a collection that cannot be read or
//!   decoded aborts the write rather than being replaced by a fresh list.
//! - [`load_or_empty`] fails open. Screens use it: an unreadable vault shows as
//!   empty instead of blocking the UI. The failure is logged, not returned.

use crate::error::{Result, VaultError};
use crate::model::Item;
use crate::store::KeyValueStore;
use tracing::{debug, warn};

/// Read and decode the collection. An absent key is an empty collection.
pub fn load<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<Item>> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    let items: Vec<Item> = serde_json::from_str(&raw).map_err(VaultError::Serialization)?;
    debug!(key, count = items.len(), "collection loaded");
    Ok(items)
}

/// Read the collection, degrading any read or decode failure to empty.
pub fn load_or_empty<S: KeyValueStore>(store: &S, key: &str) -> Vec<Item> {
    match load(store, key) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "collection unreadable, treating vault as empty");
            Vec::new()
        }
    }
}

/// Encode and persist the whole collection.
pub fn save<S: KeyValueStore>(store: &S, key: &str, items: &[Item]) -> Result<()> {
    let raw = serde_json::to_string(items).map_err(VaultError::Serialization)?;
    store.set(key, &raw)?;
    debug!(key, count = items.len(), "collection saved");
    Ok(())
}
