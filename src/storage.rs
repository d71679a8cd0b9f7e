use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Mutex;

/// Durable string-keyed storage area backing the record store.
///
/// Each logical collection lives under exactly one key holding its full
/// serialized sequence. Implementations make no atomicity promise across keys.
pub trait Storage: Send + Sync + Debug {
    /// Read the value stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, std::io::Error>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, data: &str) -> Result<(), std::io::Error>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), std::io::Error>;

    /// Get the full path/key for display purposes
    fn get_path(&self, key: &str) -> String;
}

#[cfg(not(target_arch = "wasm32"))]
pub mod native {
    use super::Storage;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    /// One file per key under a base directory.
    #[derive(Debug)]
    pub struct FileStorage {
        base_dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(directory: impl AsRef<Path>) -> Self {
            Self {
                base_dir: directory.as_ref().to_path_buf(),
            }
        }

        pub fn base_dir(&self) -> &Path {
            &self.base_dir
        }
    }

    impl Storage for FileStorage {
        fn read(&self, key: &str) -> Result<Option<String>, std::io::Error> {
            let path = self.base_dir.join(key);

            match std::fs::read_to_string(&path) {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e),
            }
        }

        fn write(&self, key: &str, data: &str) -> Result<(), std::io::Error> {
            let path = self.base_dir.join(key);

            // Ensure parent directory exists
            let parent_dir = path.parent().unwrap_or(&self.base_dir);
            std::fs::create_dir_all(parent_dir)?;

            // Write to temporary file first
            let mut tmp_file = tempfile::NamedTempFile::new_in(parent_dir)?;
            tmp_file.write_all(data.as_bytes())?;

            // Atomically move temp file to final location
            tmp_file.persist(&path).map_err(|e| e.error)?;

            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), std::io::Error> {
            match std::fs::remove_file(self.base_dir.join(key)) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            }
        }

        fn get_path(&self, key: &str) -> String {
            self.base_dir.join(key).display().to_string()
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm {
    use super::Storage;
    use web_sys::{window, Storage as WebStorage};

    /// Browser `localStorage`, namespaced per application id.
    #[derive(Debug)]
    pub struct LocalStorage {
        prefix: String,
    }

    impl LocalStorage {
        pub fn new(app_id: &str) -> Self {
            Self {
                prefix: format!("lounge_{}_", app_id.replace('/', "_").replace('.', "_")),
            }
        }

        fn get_storage() -> Result<WebStorage, std::io::Error> {
            window()
                .ok_or_else(|| std::io::Error::other("window not available"))?
                .local_storage()
                .map_err(|_| std::io::Error::other("localStorage not available"))?
                .ok_or_else(|| std::io::Error::other("localStorage is null"))
        }

        fn full_key(&self, key: &str) -> String {
            format!("{}{}", self.prefix, key)
        }
    }

    impl Storage for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, std::io::Error> {
            let storage = Self::get_storage()?;
            let full_key = self.full_key(key);

            storage
                .get_item(&full_key)
                .map_err(|_| std::io::Error::other("failed to read from localStorage"))
        }

        fn write(&self, key: &str, data: &str) -> Result<(), std::io::Error> {
            let storage = Self::get_storage()?;
            let full_key = self.full_key(key);

            // set_item throws QuotaExceededError once the origin is full
            storage
                .set_item(&full_key, data)
                .map_err(|_| std::io::Error::other("failed to write to localStorage"))
        }

        fn remove(&self, key: &str) -> Result<(), std::io::Error> {
            let storage = Self::get_storage()?;
            storage
                .remove_item(&self.full_key(key))
                .map_err(|_| std::io::Error::other("failed to remove from localStorage"))
        }

        fn get_path(&self, key: &str) -> String {
            format!("localStorage::{}", self.full_key(key))
        }
    }
}

/// In-process storage, used for tests and for running without a durable area.
///
/// An optional quota caps the combined byte length of all keys and values;
/// writes that would exceed it fail the way a full browser origin does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, std::io::Error> {
        self.entries
            .lock()
            .map_err(|_| std::io::Error::other("memory storage lock poisoned"))
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, std::io::Error> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, data: &str) -> Result<(), std::io::Error> {
        let mut entries = self.entries()?;
        if let Some(quota) = self.quota {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + data.len() > quota {
                return Err(std::io::Error::other(format!(
                    "quota of {} bytes exceeded writing '{}'",
                    quota, key
                )));
            }
        }
        entries.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), std::io::Error> {
        self.entries()?.remove(key);
        Ok(())
    }

    fn get_path(&self, key: &str) -> String {
        format!("memory::{}", key)
    }
}

/// Platform-specific storage factory
#[cfg(not(target_arch = "wasm32"))]
pub fn create_storage(directory: &str) -> Box<dyn Storage> {
    Box::new(native::FileStorage::new(directory))
}

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn create_storage(app_id: &str) -> Box<dyn Storage> {
    Box::new(wasm::LocalStorage::new(app_id))
}

#[cfg(all(target_arch = "wasm32", not(feature = "wasm")))]
pub fn create_storage(_app_id: &str) -> Box<dyn Storage> {
    Box::new(MemoryStorage::new())
}
