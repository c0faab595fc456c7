//! Domain models: pets, owners, their log entries and the food catalogs.

pub mod entries;
pub mod food;
pub mod ids;
pub mod owner;
pub mod pet;
