//! # Storage Layer
//!
//! The vault persists into a flat, string-keyed, string-valued store scoped to
//! one installation. [`KeyValueStore`] is the whole contract the core relies
//! on: `get`, `set`, `remove`. Everything above it (encoding, ids, validation,
//! write ordering) lives in the core, never in a backend.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: Production store, one file per key under a data
//!   directory. Writes are atomic (temp file then rename).
//! - [`memory::MemStore`]: In-memory store for tests. Can simulate read and
//!   write faults.
//!
//! ## Storage Format
//!
//! ```text
//! <data_dir>/
//! ├── vaultItems          # JSON array of item records
//! └── appAppearanceMode   # "light" or "dark"
//! ```
//!
//! Backends take `&self` everywhere and manage their own interior
//! mutability, so a store can be shared by reference across threads.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the platform key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
