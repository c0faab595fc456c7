//! # File Key-Value Store
//!
//! Stores each key as one JSON file in the data directory:
//!
//! ```text
//! data/
//! ├── leanpawgress.yaml           ← application config (see `config`)
//! ├── leanpawgress_owners.json    ← key "leanpawgress:owners"
//! ├── leanpawgress_userFoods.json ← key "leanpawgress:userFoods"
//! └── pet-data.json               ← console session saved with `save`
//! ```
//!
//! Keys are mapped to file names by replacing every character outside
//! `[A-Za-z0-9._-]` with `_`. Writes go to a temp file that is then renamed
//! over the target.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::storage::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_directory: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `base_directory`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {:?}", base_path))?;
            info!("Created data directory: {:?}", base_path);
        }
        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file backing `key`
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", file_stem_for_key(key)))
    }
}

fn file_stem_for_key(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        format!("_{}", stem)
    } else {
        stem
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for_key(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read key {} from {:?}", key, path);
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", path)),
        }
    }

    fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for_key(key);

        // Atomic write: temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to move {:?} into place", temp_path))?;

        debug!("Wrote key {} to {:?}", key, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;

    #[test]
    fn test_keys_map_to_safe_file_names() {
        let env = TestEnvironment::new().unwrap();
        let store = &env.store;
        assert_eq!(
            store.path_for_key("leanpawgress:owners"),
            env.base_directory().join("leanpawgress_owners.json")
        );
        assert_eq!(
            store.path_for_key("../../etc/passwd"),
            env.base_directory().join(".._.._etc_passwd.json")
        );
        assert_eq!(store.path_for_key(""), env.base_directory().join("_.json"));
        assert_eq!(store.path_for_key(".."), env.base_directory().join("_...json"));
    }

    #[test]
    fn test_put_then_get_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let store = &env.store;

        assert_eq!(store.get_value("pet-data").unwrap(), None);
        store.put_value("pet-data", r#"{"owners":[]}"#).unwrap();
        assert_eq!(
            store.get_value("pet-data").unwrap().as_deref(),
            Some(r#"{"owners":[]}"#)
        );
        assert!(!store.path_for_key("pet-data").with_extension("json.tmp").exists());

        store.put_value("pet-data", "[]").unwrap();
        assert_eq!(store.get_value("pet-data").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let env = TestEnvironment::new().unwrap();
        let nested = env.base_directory().join("nested").join("data");
        let store = FileKeyValueStore::new(&nested).unwrap();
        store.put_value("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }
}
