//! TOML configuration for opening a store or connecting the lounge API.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::storage::create_storage;
use crate::store::LocalRecordStore;

/// Which implementation backs the lounge API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Records live in the local key-value area.
    #[default]
    Local,
    /// Every operation is an HTTP call against the lounge server.
    Remote,
}

/// Settings for [`Mode::Remote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Server base URL, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Request timeout in seconds (native only).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

fn default_app_id() -> String {
    "com.example.lounge".to_string()
}

fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Namespace for the default data directory, or the localStorage key prefix in the browser.
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Directory holding one file per collection. Defaults to the platform data directory.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    /// Populate an unseeded store with demo fixtures on open.
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            storage_dir: None,
            seed_demo_data: default_seed(),
            mode: Mode::Local,
            remote: None,
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Where collections are stored: a directory natively, the app id in the browser.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn storage_location(&self) -> Result<String, ConfigError> {
        if let Some(dir) = &self.storage_dir {
            return Ok(dir.display().to_string());
        }
        let project = directories::ProjectDirs::from(&self.app_id, "", "")
            .ok_or(ConfigError::NoStorageLocation)?;
        Ok(project.data_dir().display().to_string())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn storage_location(&self) -> Result<String, ConfigError> {
        Ok(self.app_id.clone())
    }

    /// Builds the platform storage backend and opens a store on it.
    pub fn open_store(&self) -> Result<LocalRecordStore, ConfigError> {
        let location = self.storage_location()?;
        tracing::info!("Opening lounge store at {}", location);
        let storage = create_storage(&location);
        let store = if self.seed_demo_data {
            LocalRecordStore::open(storage)?
        } else {
            LocalRecordStore::new(storage)
        };
        Ok(store)
    }
}
