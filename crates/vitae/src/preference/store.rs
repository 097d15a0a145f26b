//! Key-value stores the theme preference is persisted in.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The single key the preference lives under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is not available on this host")]
    Unavailable,

    #[error("failed to access preference file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preference file {} is not a JSON object of strings: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A durable string-to-string map.
///
/// Every operation may fail; callers that can live without persistence
/// (the theme controller) log the error and carry on.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// A JSON object on disk, e.g. `{"theme": "dark"}`.
///
/// A missing file is an empty store. Writes rewrite the whole object through
/// a temporary sibling file and create parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `<config_dir>/vitae/preferences.json`, when the host has a config dir.
    pub fn default_location() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("vitae");
        path.push("preferences.json");
        Some(path)
    }

    /// A store at [`default_location`](Self::default_location), or an
    /// unavailable one when there is no such location.
    pub fn at_default_location() -> Self {
        Self {
            path: Self::default_location(),
        }
    }

    /// A store whose every operation reports [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn require_path(&self) -> Result<&Path, StoreError> {
        self.path.as_deref().ok_or(StoreError::Unavailable)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let path = self.require_path()?;
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let path = self.require_path()?;
        let io_err = |source: io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(map).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StoreError::Malformed { path, source }) => {
                tracing::info!(path = %path.display(), error = %source, "overwriting malformed preference file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-process store, mostly for tests and hosts without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under [`THEME_KEY`].
    pub fn with_theme(value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(THEME_KEY.to_string(), value.to_string());
        store
    }

    /// A store that fails every call, like disabled browser storage.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of successful `set`/`remove` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries.remove(key);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("preferences.json"));
        (dir, store)
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_set_then_get() {
        let (_dir, mut store) = temp_store();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let reopened = FileStore::new(store.path().unwrap());
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let (_dir, mut store) = temp_store();
        store.set("font", "serif").unwrap();
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get("font").unwrap().as_deref(), Some("serif"));
    }

    #[test]
    fn test_file_store_remove() {
        let (_dir, mut store) = temp_store();
        store.set(THEME_KEY, "dark").unwrap();
        store.remove(THEME_KEY).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        // removing an absent key is fine
        store.remove(THEME_KEY).unwrap();
    }

    #[test]
    fn test_file_store_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.get(THEME_KEY),
            Err(StoreError::Malformed { .. })
        ));

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_blank_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "\n").unwrap();
        assert_eq!(FileStore::new(&path).get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_unavailable() {
        let mut store = FileStore::unavailable();
        assert!(matches!(store.get(THEME_KEY), Err(StoreError::Unavailable)));
        assert!(matches!(
            store.set(THEME_KEY, "dark"),
            Err(StoreError::Unavailable)
        ));
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::with_theme("light");
        assert_eq!(store.writes(), 0);
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_unavailable() {
        let store = MemoryStore::unavailable();
        assert!(store.get(THEME_KEY).is_err());
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
