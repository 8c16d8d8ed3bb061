//! # Optic Vault Architecture
//!
//! Optic Vault catalogues eyewear: brand, model, condition, price, notes and
//! an optional photo. This crate is the **local persistence core** of the app.
//! Screens, styling and image pickers are host concerns; the core owns how the
//! item collection is stored, validated, mutated and summarized.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host UI (not in this crate)                                │
//! │  - Screens, forms, confirmation dialogs, image pickers      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Item repository + appearance preference in one facade    │
//! │  - Serializes writes, publishes preference changes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - CRUD rules: ids, validation, order, idempotent delete    │
//! │  - Derived views: search filter, statistics                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, collection.rs)                      │
//! │  - KeyValueStore trait: get / set / remove                  │
//! │  - FsStore (production), MemStore (testing)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Cached State
//!
//! The core keeps no copy of the collection between calls. Each screen asks
//! for a fresh snapshot when it becomes visible, and each mutation reads,
//! changes and writes the whole collection. Overlapping mutations are ordered
//! by the API's write queue, so none of them is lost.
//!
//! ## Failure Policy
//!
//! - Reads fail open: a missing or corrupt vault lists as empty, an unreadable
//!   preference is unset. The failure is logged with `tracing`.
//! - Writes fail loud: every store error on a write reaches the caller.
//! - Malformed numeric input is never an error; prices coerce to zero.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade; entry point for all operations
//! - [`commands`]: Business logic for each operation and the derived views
//! - [`store`]: Key-value store abstraction and implementations
//! - [`collection`]: Encoding of the item collection
//! - [`preferences`]: Appearance mode, observers and polling
//! - [`queue`]: FIFO write serialization
//! - [`collaborators`]: Image and confirmation capabilities supplied by hosts
//! - [`model`]: Core data types (`Item`, `ItemDraft`, `Condition`, `AppearanceMode`)
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod collaborators;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod preferences;
pub mod queue;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
