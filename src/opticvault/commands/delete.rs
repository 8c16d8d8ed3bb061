use crate::collection;
use crate::commands::VaultKeys;
use crate::error::Result;
use crate::store::KeyValueStore;
use tracing::{debug, info};

/// Remove the item `id`. Returns whether anything was removed.
///
/// Deleting an absent id is a no-op and performs no write.
pub fn run<S: KeyValueStore>(store: &S, keys: &VaultKeys, id: &str) -> Result<bool> {
    let mut items = collection::load(store, &keys.collection)?;
    let before = items.len();
    items.retain(|item| item.id != id);

    if items.len() == before {
        debug!(id, "delete of absent item ignored");
        return Ok(false);
    }

    collection::save(store, &keys.collection, &items)?;
    info!(id, "item deleted");
    Ok(true)
}
