//! # JSON Storage Module
//!
//! File-backed persistence: each key of the `KeyValueStore` is one JSON file
//! in the data directory. Repositories in this module map domain objects to
//! documents stored under well-known keys.

pub mod catalog_repository;
pub mod file_store;
pub mod owner_repository;
pub mod session_repository;

#[cfg(test)]
pub mod test_utils;

pub use catalog_repository::{
    load_food_catalog, load_hazard_catalog, UserFoodRepository, USER_FOODS_KEY,
};
pub use file_store::FileKeyValueStore;
pub use owner_repository::{OwnerRepository, OWNERS_KEY};
pub use session_repository::{SessionDocument, SessionRepository, DEFAULT_SESSION_KEY};
