use crate::collection;
use crate::commands::helpers::new_id;
use crate::commands::VaultKeys;
use crate::error::Result;
use crate::model::{Item, ItemDraft};
use crate::store::KeyValueStore;
use tracing::info;

/// Validate `draft`, give it a fresh id and append it to the collection.
///
/// Validation happens before the store is touched, so a rejected draft never
/// causes a read or a write.
pub fn run<S: KeyValueStore>(store: &S, keys: &VaultKeys, draft: ItemDraft) -> Result<Item> {
    draft.validate()?;

    let mut items = collection::load(store, &keys.collection)?;
    let item = draft.into_item(new_id(&items))?;
    items.push(item.clone());
    collection::save(store, &keys.collection, &items)?;

    info!(id = %item.id, brand = %item.brand, model = %item.model, "item created");
    Ok(item)
}
