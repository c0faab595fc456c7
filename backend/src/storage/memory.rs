//! In-process key-value store, used by tests and by callers that do not need
//! anything to outlive the process.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| anyhow!("memory store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
