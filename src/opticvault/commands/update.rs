use crate::collection;
use crate::commands::helpers::position_of;
use crate::commands::VaultKeys;
use crate::error::{Result, VaultError};
use crate::model::{Item, ItemDraft};
use crate::store::KeyValueStore;
use tracing::info;

/// Replace the item `id` with the values from `draft`.
///
/// This is a whole-record replace: the id and position are kept, every other
/// field comes from the draft. A draft without a photo clears the stored one.
pub fn run<S: KeyValueStore>(
    store: &S,
    keys: &VaultKeys,
    id: &str,
    draft: ItemDraft,
) -> Result<Item> {
    let mut items = collection::load(store, &keys.collection)?;
    let pos = position_of(&items, id).ok_or_else(|| VaultError::ItemNotFound(id.to_string()))?;

    let item = draft.into_item(id.to_string())?;
    items[pos] = item.clone();
    collection::save(store, &keys.collection, &items)?;

    info!(id, "item updated");
    Ok(item)
}
