//! # Catalog Repository
//!
//! Loads the read-only food and hazard catalogs and persists the foods added
//! by the user.
//!
//! The built-in catalogs are compiled into the binary from `data/`; a
//! configured path replaces them. User foods live under the
//! `leanpawgress:userFoods` key as a JSON array of catalog entries.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::food::{Food, FoodCatalog, HazardCatalog};
use crate::storage::traits::KeyValueStore;

pub const USER_FOODS_KEY: &str = "leanpawgress:userFoods";

const BUILTIN_FOOD_CATALOG: &str = include_str!("../../../data/food-catalog.json");
const BUILTIN_HAZARD_CATALOG: &str = include_str!("../../../data/toxic-foods.json");

/// Load the food catalog from `path`, or the built-in one when no path is given
pub fn load_food_catalog(path: Option<&Path>) -> Result<FoodCatalog> {
    let catalog: FoodCatalog = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read food catalog {:?}", path))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse food catalog {:?}", path))?
        }
        None => serde_json::from_str(BUILTIN_FOOD_CATALOG)
            .context("Failed to parse built-in food catalog")?,
    };
    info!("Loaded {} catalog food(s)", catalog.foods.len());
    Ok(catalog)
}

/// Load the hazard catalog from `path`, or the built-in one when no path is given
pub fn load_hazard_catalog(path: Option<&Path>) -> Result<HazardCatalog> {
    let catalog: HazardCatalog = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read hazard catalog {:?}", path))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse hazard catalog {:?}", path))?
        }
        None => serde_json::from_str(BUILTIN_HAZARD_CATALOG)
            .context("Failed to parse built-in hazard catalog")?,
    };
    info!("Loaded {} hazard(s)", catalog.items.len());
    Ok(catalog)
}

#[derive(Clone)]
pub struct UserFoodRepository {
    store: Arc<dyn KeyValueStore>,
}

impl UserFoodRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// User foods, or none when the document is missing or unreadable
    pub fn load_user_foods(&self) -> Vec<Food> {
        let loaded = self.store.get_value(USER_FOODS_KEY).and_then(|json| match json {
            Some(json) => serde_json::from_str::<Vec<Food>>(&json)
                .context("Failed to parse user foods"),
            None => Ok(Vec::new()),
        });
        match loaded {
            Ok(foods) => foods,
            Err(e) => {
                warn!("Could not load user foods: {:#}", e);
                Vec::new()
            }
        }
    }

    pub fn save_user_foods(&self, foods: &[Food]) -> Result<()> {
        let json = serde_json::to_string(foods).context("Failed to serialize user foods")?;
        self.store
            .put_value(USER_FOODS_KEY, &json)
            .context("Failed to store user foods")
    }
}
