//! # Configuration
//!
//! Vault configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `OPTICVAULT_DATA_DIR`, `OPTICVAULT_LOG`, etc.
//! 2. **Config file**: `opticvault.toml`, by default in the OS config directory
//!    (via the `directories` crate).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where [`FsStore`](crate::store::fs::FsStore) keeps its files |
//! | `collection_key` | `vaultItems` | Store key for the item collection |
//! | `preference_key` | `appAppearanceMode` | Store key for the appearance mode |
//! | `poll_interval_ms` | `500` | Period for [`AppearanceWatcher`](crate::preferences::AppearanceWatcher) polling |
//! | `log_filter` | `info` | Default tracing filter when `RUST_LOG` is unset |
//! | `log_json` | `false` | Emit JSON log lines |

use crate::commands::VaultKeys;
use crate::error::{Result, VaultError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "opticvault.toml";
const APP_NAME: &str = "opticvault";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    /// Data directory. When absent, the OS-appropriate data dir is used.
    #[config(env = "OPTICVAULT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[config(default = "vaultItems", env = "OPTICVAULT_COLLECTION_KEY")]
    pub collection_key: String,

    #[config(default = "appAppearanceMode", env = "OPTICVAULT_PREFERENCE_KEY")]
    pub preference_key: String,

    #[config(default = 500, env = "OPTICVAULT_POLL_INTERVAL_MS")]
    pub poll_interval_ms: u64,

    #[config(default = "info", env = "OPTICVAULT_LOG")]
    pub log_filter: String,

    #[config(default = false, env = "OPTICVAULT_LOG_JSON")]
    pub log_json: bool,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            collection_key: VaultKeys::DEFAULT_COLLECTION.to_string(),
            preference_key: VaultKeys::DEFAULT_PREFERENCE.to_string(),
            poll_interval_ms: 500,
            log_filter: "info".to_string(),
            log_json: false,
        }
    }
}

impl VaultConfig {
    /// Load from environment, then `path` (if it exists), then defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        <Self as Config>::builder()
            .env()
            .file(path.as_ref())
            .load()
            .map_err(|e| VaultError::Config(e.to_string()))
    }

    /// Load using the config file in the OS config directory.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(path),
            None => <Self as Config>::builder()
                .env()
                .load()
                .map_err(|e| VaultError::Config(e.to_string())),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| VaultError::Config("Could not determine a data directory".to_string()))
    }

    pub fn keys(&self) -> VaultKeys {
        VaultKeys::new(&self.collection_key, &self.preference_key)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
