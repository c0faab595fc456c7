//! # Storage Layer
//!
//! Persistence for the tracker. Everything is stored as JSON documents in a
//! `KeyValueStore`; `json` provides the file-backed store and the
//! repositories, `memory` an in-process store.

pub mod json;
pub mod memory;
pub mod traits;

pub use memory::MemoryKeyValueStore;
pub use traits::KeyValueStore;
