//! # Command Layer
//!
//! One module per operation, each exposing plain functions over a
//! [`KeyValueStore`](crate::store::KeyValueStore). Commands hold the business
//! rules (ids, validation, ordering, delete idempotence) and know nothing about
//! threads or observers; the [`api`](crate::api) facade adds write ordering
//! and change notification on top.
//!
//! Mutating commands are full read-modify-write cycles: read the collection,
//! apply exactly one change, write the whole collection back.
//!
//! [`search`] and [`stats`] are pure functions over a snapshot and never touch
//! a store.

pub mod clear;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;

/// Store keys for the two independent records the vault persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultKeys {
    pub collection: String,
    pub preference: String,
}

impl VaultKeys {
    pub const DEFAULT_COLLECTION: &'static str = "vaultItems";
    pub const DEFAULT_PREFERENCE: &'static str = "appAppearanceMode";

    pub fn new(collection: impl Into<String>, preference: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            preference: preference.into(),
        }
    }
}

impl Default for VaultKeys {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLLECTION, Self::DEFAULT_PREFERENCE)
    }
}
