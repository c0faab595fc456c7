//! # Storage Traits
//!
//! The persistence contract is a plain string key-value store holding JSON
//! documents. Repositories build on top of it, so the domain never touches a
//! concrete backend.

use anyhow::Result;

/// Key-value storage of serialized documents
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, `None` if the key is absent
    fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Store a document under `key`, replacing any previous value
    fn put_value(&self, key: &str, value: &str) -> Result<()>;
}
