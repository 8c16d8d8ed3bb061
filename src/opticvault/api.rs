//! # API Facade
//!
//! [`VaultApi`] is the single entry point for screens: it is the item
//! repository and the preference store in one handle.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the command functions in [`commands`]
//! - **Serializes writes** through a [`WriteQueue`], so overlapping mutations
//!   from different screens or threads cannot lose each other's changes
//! - **Publishes** appearance changes to subscribed observers
//!
//! It holds no cached copy of the collection. Every read is a fresh snapshot
//! from the store.
//!
//! ## Read and write policy
//!
//! Reads fail open (`list_items` returns an empty vault,
//! `get_appearance_mode` returns `None`). Writes never do: a failed write is
//! always returned to the caller, so the UI never claims a change was saved
//! when it was not.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `VaultApi<FsStore>`
//! - Testing: `VaultApi<MemStore>`
//!
//! `VaultApi` methods take `&self`; wrap it in an `Arc` to share it across
//! threads.

use crate::collaborators::Confirm;
use crate::commands::{self, stats::Stats, VaultKeys};
use crate::config::VaultConfig;
use crate::error::Result;
use crate::model::{AppearanceMode, Item, ItemDraft};
use crate::preferences::{self, AppearanceWatcher, PreferenceHub, Subscription};
use crate::queue::WriteQueue;
use crate::store::fs::FsStore;
use crate::store::KeyValueStore;
use tracing::debug;

pub struct VaultApi<S: KeyValueStore> {
    store: S,
    keys: VaultKeys,
    writes: WriteQueue,
    appearance: PreferenceHub,
}

impl<S: KeyValueStore> VaultApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, VaultKeys::default())
    }

    pub fn with_keys(store: S, keys: VaultKeys) -> Self {
        Self {
            store,
            keys,
            writes: WriteQueue::new(),
            appearance: PreferenceHub::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &VaultKeys {
        &self.keys
    }

    // --- Items ---

    pub fn list_items(&self) -> Vec<Item> {
        commands::list::run(&self.store, &self.keys)
    }

    pub fn get_item(&self, id: &str) -> Option<Item> {
        commands::list::find(&self.store, &self.keys, id)
    }

    pub fn create_item(&self, draft: ItemDraft) -> Result<Item> {
        self.writes
            .run(|| commands::create::run(&self.store, &self.keys, draft))
    }

    pub fn update_item(&self, id: &str, draft: ItemDraft) -> Result<Item> {
        self.writes
            .run(|| commands::update::run(&self.store, &self.keys, id, draft))
    }

    /// Returns whether an item was removed; an absent id is not an error.
    pub fn delete_item(&self, id: &str) -> Result<bool> {
        self.writes
            .run(|| commands::delete::run(&self.store, &self.keys, id))
    }

    pub fn clear_all(&self) -> Result<()> {
        self.writes.run(|| commands::clear::run(&self.store, &self.keys))
    }

    /// Delete after the user confirms. Returns false when declined or when
    /// nothing was removed.
    pub fn delete_item_confirmed<C: Confirm + ?Sized>(&self, id: &str, confirm: &C) -> Result<bool> {
        if !confirm.confirm("Delete this item? This cannot be undone.") {
            debug!(id, "delete declined");
            return Ok(false);
        }
        self.delete_item(id)
    }

    /// Clear the vault after the user confirms. Returns whether it ran.
    pub fn clear_all_confirmed<C: Confirm + ?Sized>(&self, confirm: &C) -> Result<bool> {
        if !confirm.confirm("Delete all items? This cannot be undone.") {
            debug!("clear declined");
            return Ok(false);
        }
        self.clear_all()?;
        Ok(true)
    }

    // --- Derived views ---

    /// Fresh snapshot filtered by `query`.
    pub fn search(&self, query: &str) -> Vec<Item> {
        commands::search::filter_items(&self.list_items(), query)
    }

    /// Statistics over a fresh snapshot.
    pub fn stats(&self) -> Stats {
        commands::stats::compute_stats(&self.list_items())
    }

    // --- Appearance ---

    pub fn get_appearance_mode(&self) -> Option<AppearanceMode> {
        preferences::get_appearance_mode(&self.store, &self.keys.preference)
    }

    /// Persist `mode`. Observers are told only if the stored value changed,
    /// and always in the order the writes landed.
    pub fn set_appearance_mode(&self, mode: AppearanceMode) -> Result<()> {
        let stamp = self.writes.run(|| -> Result<Option<u64>> {
            let previous = self.get_appearance_mode();
            preferences::set_appearance_mode(&self.store, &self.keys.preference, mode)?;
            Ok((previous != Some(mode)).then(|| self.appearance.stamp()))
        })?;

        if let Some(stamp) = stamp {
            self.appearance.publish_stamped(stamp, mode);
        }
        Ok(())
    }

    pub fn subscribe_appearance<F>(&self, observer: F) -> Subscription
    where
        F: Fn(AppearanceMode) + Send + Sync + 'static,
    {
        self.appearance.subscribe(observer)
    }

    /// Poll-based watcher for changes written outside this process.
    pub fn watch_appearance(&self) -> AppearanceWatcher {
        AppearanceWatcher::new(&self.store, self.keys.preference.clone())
    }

    /// Re-read the stored mode for `watcher`; see [`AppearanceWatcher::check`].
    pub fn poll_appearance(&self, watcher: &mut AppearanceWatcher) -> Option<AppearanceMode> {
        watcher.check(&self.store)
    }
}

impl VaultApi<FsStore> {
    /// Open the file-backed vault described by `config`.
    pub fn from_config(config: &VaultConfig) -> Result<Self> {
        let store = FsStore::new(config.data_dir()?);
        Ok(Self::with_keys(store, config.keys()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VaultError;
    use crate::store::memory::MemStore;
    use crate::test_utils::TestEnv;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc, Mutex};
    use std::thread;

    #[test]
    fn create_then_list_and_stats() {
        let api = VaultApi::new(MemStore::new());
        let item = api
            .create_item(
                ItemDraft::new("Oakley", "Holbrook")
                    .price("150.00")
                    .notes("Polarized lenses"),
            )
            .unwrap();

        assert_eq!(api.list_items(), vec![item.clone()]);
        assert_eq!(api.get_item(&item.id), Some(item));
        let stats = api.stats();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.total_spend_display(), "$150.00");
    }

    #[test]
    fn oversized_prices_do_not_break_stats() {
        let api = VaultApi::new(MemStore::new());
        for model in ["A", "B"] {
            let item = api
                .create_item(ItemDraft::new("Oakley", model).price("50000000000000000000000000000"))
                .unwrap();
            assert_eq!(item.price, rust_decimal::Decimal::ZERO);
        }

        let stats = api.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_spend_display(), "$0.00");
    }

    #[test]
    fn listed_items_match_what_was_created() {
        let api = VaultApi::new(MemStore::new());
        let prices = ["12345678901234567.89", "123456789012.34", "0.1", "19.999", "1.5e2"];
        let created: Vec<Item> = prices
            .into_iter()
            .map(|price| {
                api.create_item(ItemDraft::new("Persol", "714").price(price))
                    .unwrap()
            })
            .collect();

        assert_eq!(api.list_items(), created);
        assert_eq!(created[1].price.to_string(), "123456789012.34");
    }

    #[test]
    fn search_uses_fresh_snapshot() {
        let api = VaultApi::new(MemStore::new());
        api.create_item(ItemDraft::new("Oakley", "Holbrook")).unwrap();
        assert!(api.search("ray").is_empty());

        api.create_item(ItemDraft::new("Ray-Ban", "Aviator")).unwrap();
        assert_eq!(api.search("ray").len(), 1);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let api = VaultApi::new(MemStore::new());
        let err = api.update_item("ghost", ItemDraft::new("A", "B")).unwrap_err();
        assert!(matches!(err, VaultError::ItemNotFound(_)));
    }

    #[test]
    fn confirmed_delete_respects_answer() {
        let api = VaultApi::new(MemStore::new());
        let item = api.create_item(ItemDraft::new("A", "1")).unwrap();

        assert!(!api.delete_item_confirmed(&item.id, &|_: &str| false).unwrap());
        assert_eq!(api.list_items().len(), 1);

        assert!(api.delete_item_confirmed(&item.id, &|_: &str| true).unwrap());
        assert!(api.list_items().is_empty());
    }

    #[test]
    fn confirmed_clear_respects_answer() {
        let api = VaultApi::new(MemStore::new());
        api.create_item(ItemDraft::new("A", "1")).unwrap();

        assert!(!api.clear_all_confirmed(&|_: &str| false).unwrap());
        assert_eq!(api.list_items().len(), 1);

        assert!(api.clear_all_confirmed(&|_: &str| true).unwrap());
        assert!(api.list_items().is_empty());
    }

    #[test]
    fn appearance_change_notifies_subscribers_once() {
        let api = VaultApi::new(MemStore::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = api.subscribe_appearance(move |mode| sink.lock().unwrap().push(mode));

        api.set_appearance_mode(AppearanceMode::Dark).unwrap();
        api.set_appearance_mode(AppearanceMode::Dark).unwrap();
        api.set_appearance_mode(AppearanceMode::Light).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![AppearanceMode::Dark, AppearanceMode::Light]
        );
        assert_eq!(api.get_appearance_mode(), Some(AppearanceMode::Light));
    }

    #[test]
    fn failed_appearance_write_does_not_notify() {
        let api = VaultApi::new(MemStore::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let _sub = api.subscribe_appearance(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        api.store().set_simulate_write_error(true);
        assert!(api.set_appearance_mode(AppearanceMode::Dark).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.get_appearance_mode(), None);
    }

    #[test]
    fn slow_observer_ends_on_the_stored_mode() {
        let api = Arc::new(VaultApi::new(MemStore::new()));
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        let entered_tx = Mutex::new(entered_tx);
        let release_rx = Mutex::new(release_rx);
        let first_call = AtomicBool::new(true);

        let shown = Arc::new(Mutex::new(Vec::new()));
        let sink = shown.clone();
        let _screen = api.subscribe_appearance(move |mode| {
            if first_call.swap(false, Ordering::SeqCst) {
                entered_tx.lock().unwrap().send(()).unwrap();
                release_rx.lock().unwrap().recv().unwrap();
            }
            sink.lock().unwrap().push(mode);
        });

        let writer = {
            let api = api.clone();
            thread::spawn(move || api.set_appearance_mode(AppearanceMode::Dark).unwrap())
        };
        entered_rx.recv().unwrap();
        api.set_appearance_mode(AppearanceMode::Light).unwrap();
        release_tx.send(()).unwrap();
        writer.join().unwrap();

        assert_eq!(api.get_appearance_mode(), Some(AppearanceMode::Light));
        assert_eq!(
            *shown.lock().unwrap(),
            vec![AppearanceMode::Dark, AppearanceMode::Light]
        );
    }

    #[test]
    fn custom_keys_are_respected() {
        let api = VaultApi::with_keys(MemStore::new(), VaultKeys::new("items", "theme"));
        api.create_item(ItemDraft::new("A", "1")).unwrap();
        api.set_appearance_mode(AppearanceMode::Dark).unwrap();

        assert!(api.store().raw("items").is_some());
        assert_eq!(api.store().raw("theme").as_deref(), Some("dark"));
        assert_eq!(api.store().raw("vaultItems"), None);
    }

    #[test]
    fn watcher_sees_writes_from_another_handle() {
        let env = TestEnv::new();
        let other = env.reopen();
        let mut watcher = env.api.watch_appearance();
        assert_eq!(env.api.poll_appearance(&mut watcher), None);

        other.set_appearance_mode(AppearanceMode::Dark).unwrap();
        assert_eq!(
            env.api.poll_appearance(&mut watcher),
            Some(AppearanceMode::Dark)
        );
        assert_eq!(env.api.poll_appearance(&mut watcher), None);
    }

    #[test]
    fn file_backed_vault_survives_reopen() {
        let env = TestEnv::new();
        let item = env.api.create_item(ItemDraft::new("Persol", "714")).unwrap();

        assert_eq!(env.reopen().list_items(), vec![item]);
    }
}
