//! Test utilities for the JSON file storage
//!
//! `TestEnvironment` owns a temporary data directory that is removed when the
//! environment is dropped, even if the test panics.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::file_store::FileKeyValueStore;
use crate::storage::traits::KeyValueStore;

pub struct TestEnvironment {
    /// Kept alive so the directory is only removed on drop
    _temp_dir: TempDir,
    pub store: FileKeyValueStore,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let store = FileKeyValueStore::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            store,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// The store as the shared trait object repositories take
    pub fn shared_store(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_directory().to_path_buf();
            assert!(base_path.exists());

            env.shared_store().put_value("marker", "{}")?;
            assert!(base_path.join("marker.json").exists());
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
