//! Local key/value store backing the session.
//!
//! One JSON object persisted at `${DEPOT_HOME}/store.json` with restricted
//! permissions (0600). Storage failures never escape this module: they are
//! logged and callers observe the absence of a value instead of an error.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::paths;

/// Synchronous key/value store over a single JSON file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store at its default location under DEPOT_HOME.
    pub fn open_default() -> Self {
        Self {
            path: paths::store_path(),
        }
    }

    /// Opens a store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persists `value` under `key`.
    ///
    /// Serialization and I/O failures are logged and swallowed; the store is
    /// left unchanged on failure.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize value for store");
                return;
            }
        };

        let mut map = self.read_map();
        map.insert(key.to_string(), value);
        self.write_map(&map);
    }

    /// Returns the value stored under `key`, or `None` when the store file is
    /// absent, unreadable, corrupt, the key is missing, or the stored value
    /// does not deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read_map().remove(key)?;
        match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value has an unexpected shape");
                None
            }
        }
    }

    /// Removes the entry under `key`. Missing keys are a no-op.
    pub fn remove(&self, key: &str) {
        let mut map = self.read_map();
        if map.remove(key).is_some() {
            self.write_map(&map);
        }
    }

    /// Removes every entry under this store's control.
    pub fn clear(&self) {
        if self.path.exists() {
            self.write_map(&HashMap::new());
        }
    }

    fn read_map(&self) -> HashMap<String, Value> {
        if !self.path.exists() {
            return HashMap::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read store");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "store file is corrupt, treating as empty");
                HashMap::new()
            }
        }
    }

    fn write_map(&self, map: &HashMap<String, Value>) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::warn!(path = %parent.display(), error = %e, "failed to create store directory");
            return;
        }

        let contents = match serde_json::to_string_pretty(map) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize store");
                return;
            }
        };

        // Write with restricted permissions: the store holds the auth token.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path);
            match file {
                Ok(mut f) => {
                    if let Err(e) = f.write_all(contents.as_bytes()) {
                        tracing::warn!(path = %self.path.display(), error = %e, "failed to write store");
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "failed to open store for writing");
                }
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(e) = fs::write(&self.path, contents) {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to write store");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Profile {
        id: i64,
        username: String,
    }

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("store.json"));
        (dir, store)
    }

    #[test]
    fn round_trips_values() {
        let (_dir, store) = temp_store();
        let profile = Profile {
            id: 7,
            username: "alice".to_string(),
        };

        store.set("user", &profile);
        assert_eq!(store.get::<Profile>("user"), Some(profile));
    }

    #[test]
    fn get_of_missing_key_is_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get::<String>("nope"), None);
    }

    #[test]
    fn non_json_value_reads_back_as_none() {
        let (_dir, store) = temp_store();

        // NaN has no JSON representation; it lands as null and reads back
        // as no value.
        store.set("bad", &f64::NAN);
        assert_eq!(store.get::<f64>("bad"), None);
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("store.json"), "{not json").unwrap();

        assert_eq!(store.get::<String>("token"), None);

        // Writing afterwards recovers the store.
        store.set("token", &"t1".to_string());
        assert_eq!(store.get::<String>("token"), Some("t1".to_string()));
    }

    #[test]
    fn remove_and_clear() {
        let (_dir, store) = temp_store();
        store.set("a", &1_i64);
        store.set("b", &2_i64);

        store.remove("a");
        assert_eq!(store.get::<i64>("a"), None);
        assert_eq!(store.get::<i64>("b"), Some(2));

        store.clear();
        assert_eq!(store.get::<i64>("b"), None);
    }

    #[test]
    fn wrong_type_reads_as_none() {
        let (_dir, store) = temp_store();
        store.set("key", &"text".to_string());
        assert_eq!(store.get::<i64>("key"), None);
    }
}
