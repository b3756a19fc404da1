//! Settings persistence over a key-value backend.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, error, warn};

use super::Settings;
use crate::error::{CoreResult, StorageError};

/// Key under which settings are stored.
pub const SETTINGS_KEY: &str = "diceAppSettings";

/// A string key-value store, in the shape of browser local storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// An in-memory store, optionally size-limited or disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    /// An empty, unlimited store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of keys plus values to `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// A store that refuses every operation.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        if let Some(limit) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        self.entries.remove(key);
        Ok(())
    }
}

/// A store keeping one `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Store files under `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// Loads and saves [`Settings`] through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Use `backend` with the standard settings key.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, SETTINGS_KEY)
    }

    /// Use `backend` with a custom key.
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The key settings are stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutable access to the underlying backend.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Load settings, repairing whatever is stored.
    ///
    /// Missing data, unreadable storage, and undecodable blobs all yield the
    /// defaults. This never fails.
    pub fn load(&self) -> Settings {
        match self.backend.get(&self.key) {
            Ok(Some(raw)) => {
                let settings = Settings::from_json(&raw);
                debug!(
                    count = settings.active_die_count(),
                    "loaded settings from '{}'", self.key
                );
                settings
            }
            Ok(None) => {
                debug!("no stored settings under '{}', using defaults", self.key);
                Settings::default()
            }
            Err(e) => {
                warn!("could not read stored settings, using defaults: {e}");
                Settings::default()
            }
        }
    }

    /// Persist `settings`, replacing whatever was stored.
    pub fn save(&mut self, settings: &Settings) -> CoreResult<()> {
        let json = settings.to_json()?;
        self.backend.set(&self.key, &json).map_err(|e| {
            error!("error saving settings: {e}");
            e.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn named(count: usize, raw: [&str; 6]) -> Settings {
        Settings::new(count, raw.map(str::to_string))
    }

    #[test]
    fn load_without_data_gives_defaults() {
        let store = SettingsStore::new(MemoryStore::new());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let mut store = SettingsStore::new(MemoryStore::new());
        let settings = named(5, ["Sun", "Moon", "Star", "Comet", "Void", "Rain"]);
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn blank_names_saved_as_defaults() {
        let mut store = SettingsStore::new(MemoryStore::new());
        store
            .save(&named(3, ["", "Two", "", "Four", "", "Six"]))
            .unwrap();
        assert_eq!(
            store.load().face_names().to_vec(),
            vec!["Die 1", "Two", "Die 3", "Four", "Die 5", "Six"]
        );
    }

    #[test]
    fn corrupt_blob_loads_defaults() {
        let mut backend = MemoryStore::new();
        backend.set(SETTINGS_KEY, "{{{").unwrap();
        let store = SettingsStore::new(backend);
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn disabled_backend() {
        let mut store = SettingsStore::new(MemoryStore::disabled());
        assert_eq!(store.load(), Settings::default());
        let err = store.save(&Settings::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Persistence(StorageError::Unavailable)
        ));
    }

    #[test]
    fn quota_exceeded() {
        let mut store = SettingsStore::new(MemoryStore::new().with_quota(16));
        let err = store.save(&Settings::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Persistence(StorageError::QuotaExceeded { limit: 16, .. })
        ));
        assert_eq!(store.backend().get(SETTINGS_KEY).unwrap(), None);
    }

    #[test]
    fn overwrite_counts_against_quota_once() {
        let mut backend = MemoryStore::new().with_quota(10);
        backend.set("k", "123456789").unwrap();
        backend.set("k", "987654321").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("987654321"));
    }

    #[test]
    fn custom_key() {
        let mut store = SettingsStore::with_key(MemoryStore::new(), "other");
        store.save(&named(2, ["a", "b", "c", "d", "e", "f"])).unwrap();
        assert_eq!(store.key(), "other");
        assert!(store.backend().get("other").unwrap().is_some());
        assert!(store.backend().get(SETTINGS_KEY).unwrap().is_none());
    }

    #[test]
    fn dir_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::new(DirStore::new(dir.path().join("data")));
        assert_eq!(store.load(), Settings::default());

        let settings = named(6, ["1", "2", "3", "4", "5", "6"]);
        store.save(&settings).unwrap();
        assert!(dir.path().join("data").join("diceAppSettings.json").exists());
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn dir_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = DirStore::new(dir.path());
        backend.set("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }
}
