//! # Appearance Preference
//!
//! A single scalar (`light` or `dark`) stored under its own key, independent
//! of the item collection. Reads fail open to "unset"; writes propagate.
//!
//! ## Keeping screens in sync
//!
//! Several independently mounted views need to show the same mode. Two
//! mechanisms are provided:
//!
//! - [`PreferenceHub`]: in-process publish/subscribe. Observers registered with
//!   [`PreferenceHub::subscribe`] are called after a write that changes the
//!   stored value. Notifications are stamped in write order, so a slow
//!   observer can delay a newer mode but never overwrite it with an older one.
//! - [`AppearanceWatcher`]: re-reads the key on demand and reports changes. It
//!   covers writers the hub cannot see, such as another process sharing the
//!   same data directory. Drive it on a timer (see
//!   [`VaultConfig::poll_interval`](crate::config::VaultConfig::poll_interval)).

use crate::error::Result;
use crate::model::AppearanceMode;
use crate::store::KeyValueStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, warn};

/// Read the stored mode. Missing, unreadable or unrecognized values are `None`.
pub fn get_appearance_mode<S: KeyValueStore>(store: &S, key: &str) -> Option<AppearanceMode> {
    match store.get(key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(mode) => Some(mode),
            Err(_) => {
                debug!(key, value = %raw, "ignoring unrecognized appearance mode");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "appearance mode unreadable, treating as unset");
            None
        }
    }
}

/// Persist `mode`, overwriting whatever was stored.
pub fn set_appearance_mode<S: KeyValueStore>(
    store: &S,
    key: &str,
    mode: AppearanceMode,
) -> Result<()> {
    store.set(key, mode.as_str())?;
    info!(key, mode = %mode, "appearance mode saved");
    Ok(())
}

type Observer = Arc<dyn Fn(AppearanceMode) + Send + Sync>;

/// Ordering state for notifications. Only one thread delivers at a time; a
/// publish that arrives mid-delivery leaves its value in `latest` for the
/// delivering thread to pick up.
#[derive(Default)]
struct Delivery {
    latest: Option<(u64, AppearanceMode)>,
    delivered: u64,
    delivering: bool,
}

#[derive(Default)]
struct HubInner {
    next_id: AtomicU64,
    next_stamp: AtomicU64,
    observers: Mutex<Vec<(u64, Observer)>>,
    delivery: Mutex<Delivery>,
}

impl HubInner {
    fn lock(&self) -> MutexGuard<'_, Vec<(u64, Observer)>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn delivery(&self) -> MutexGuard<'_, Delivery> {
        self.delivery.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the `delivering` flag if an observer panics mid-delivery.
struct Delivering<'a> {
    hub: &'a HubInner,
    armed: bool,
}

impl Drop for Delivering<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.hub.delivery().delivering = false;
        }
    }
}

/// Process-wide registry of appearance observers.
#[derive(Clone, Default)]
pub struct PreferenceHub {
    inner: Arc<HubInner>,
}

impl PreferenceHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(AppearanceMode) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.lock().push((id, Arc::new(observer)));
        Subscription {
            hub: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Reserve the next position in the notification order. Take the stamp
    /// while the write it describes is still serialized, then hand both to
    /// [`publish_stamped`](Self::publish_stamped).
    pub fn stamp(&self) -> u64 {
        self.inner.next_stamp.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Stamp and deliver `mode` in one step.
    pub fn publish(&self, mode: AppearanceMode) {
        let stamp = self.stamp();
        self.publish_stamped(stamp, mode);
    }

    /// Deliver `mode` unless a later stamp has already been published.
    ///
    /// Deliveries never overlap and never go backwards: when another thread
    /// is already notifying, this call hands its value over and returns, and
    /// that thread delivers it once the current round finishes. Observers run
    /// outside the registry lock, so they may subscribe, drop subscriptions
    /// or publish from inside the callback.
    pub fn publish_stamped(&self, stamp: u64, mode: AppearanceMode) {
        {
            let mut delivery = self.inner.delivery();
            if delivery.latest.is_some_and(|(seen, _)| seen >= stamp) {
                debug!(stamp, mode = %mode, "dropping stale appearance notification");
                return;
            }
            delivery.latest = Some((stamp, mode));
            if delivery.delivering {
                return;
            }
            delivery.delivering = true;
        }

        let mut guard = Delivering {
            hub: &self.inner,
            armed: true,
        };
        loop {
            let mode = {
                let mut delivery = self.inner.delivery();
                match delivery.latest {
                    Some((stamp, mode)) if stamp > delivery.delivered => {
                        delivery.delivered = stamp;
                        mode
                    }
                    _ => {
                        delivery.delivering = false;
                        guard.armed = false;
                        return;
                    }
                }
            };

            let observers: Vec<Observer> =
                self.inner.lock().iter().map(|(_, o)| o.clone()).collect();
            debug!(mode = %mode, observers = observers.len(), "publishing appearance change");
            for observer in observers {
                observer(mode);
            }
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.lock().len()
    }
}

/// Handle for a registered observer; unregisters on drop.
#[must_use = "dropping a Subscription unregisters the observer"]
pub struct Subscription {
    hub: Weak<HubInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Poll-based change detector for the stored mode.
///
/// Only valid modes count as changes: if the key is removed or holds garbage,
/// the watcher keeps reporting the last mode it saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearanceWatcher {
    key: String,
    last: Option<AppearanceMode>,
}

impl AppearanceWatcher {
    /// Start watching `key`, seeded with its current value.
    pub fn new<S: KeyValueStore>(store: &S, key: impl Into<String>) -> Self {
        let key = key.into();
        let last = get_appearance_mode(store, &key);
        Self { key, last }
    }

    pub fn current(&self) -> Option<AppearanceMode> {
        self.last
    }

    /// Re-read the store. Returns the new mode if it differs from the last one
    /// observed.
    pub fn check<S: KeyValueStore>(&mut self, store: &S) -> Option<AppearanceMode> {
        let stored = get_appearance_mode(store, &self.key)?;
        if self.last == Some(stored) {
            return None;
        }
        debug!(key = %self.key, mode = %stored, "appearance changed in storage");
        self.last = Some(stored);
        Some(stored)
    }
}
