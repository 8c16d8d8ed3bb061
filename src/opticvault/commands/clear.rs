use crate::commands::VaultKeys;
use crate::error::Result;
use crate::store::KeyValueStore;
use tracing::info;

/// Drop the whole collection by removing its key. The appearance preference
/// is a separate record and survives.
pub fn run<S: KeyValueStore>(store: &S, keys: &VaultKeys) -> Result<()> {
    store.remove(&keys.collection)?;
    info!(key = %keys.collection, "vault cleared");
    Ok(())
}
