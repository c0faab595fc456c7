//! Food catalog lookups, user-added foods and toxicity checks.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::models::entries::MealEntry;
use super::models::food::{Food, FoodCatalog, FoodValidationError, Hazard, HazardCatalog};
use super::models::pet::{Pet, PetValidationError};
use crate::storage::json::UserFoodRepository;

#[derive(Debug, thiserror::Error)]
pub enum FoodError {
    #[error("Unknown food: {0}")]
    UnknownFood(String),
    #[error("Grams must be a positive number (got {0})")]
    InvalidGrams(f64),
    #[error(transparent)]
    Validation(#[from] FoodValidationError),
    #[error(transparent)]
    Pet(#[from] PetValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A catalog entry together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ListedFood {
    pub food: Food,
    pub user_defined: bool,
}

pub struct FoodService {
    catalog: FoodCatalog,
    hazards: HazardCatalog,
    user_foods: Vec<Food>,
    user_food_repository: UserFoodRepository,
}

impl FoodService {
    /// Create the service, loading previously added user foods
    pub fn new(
        catalog: FoodCatalog,
        hazards: HazardCatalog,
        user_food_repository: UserFoodRepository,
    ) -> Self {
        let user_foods = user_food_repository.load_user_foods();
        info!(
            "Food service ready: {} catalog food(s), {} user food(s), {} hazard(s)",
            catalog.foods.len(),
            user_foods.len(),
            hazards.items.len()
        );
        Self {
            catalog,
            hazards,
            user_foods,
            user_food_repository,
        }
    }

    /// Built-in foods not overridden by a user food, followed by the user foods
    pub fn list_foods(&self) -> Vec<ListedFood> {
        let builtin = self
            .catalog
            .foods
            .iter()
            .filter(|food| !self.user_foods.iter().any(|u| u.id == food.id))
            .map(|food| ListedFood {
                food: food.clone(),
                user_defined: false,
            });
        let user = self.user_foods.iter().map(|food| ListedFood {
            food: food.clone(),
            user_defined: true,
        });
        builtin.chain(user).collect()
    }

    /// Exact-id lookup; user foods take precedence over the built-in catalog
    pub fn resolve_food(&self, food_id: &str) -> Option<&Food> {
        self.user_foods
            .iter()
            .find(|f| f.id == food_id)
            .or_else(|| self.catalog.get(food_id))
    }

    /// Calories in `grams` of the food `food_id`, rounded to a whole calorie
    pub fn calories_for(&self, food_id: &str, grams: f64) -> Result<f64, FoodError> {
        validate_grams(grams)?;
        let food = self
            .resolve_food(food_id)
            .ok_or_else(|| FoodError::UnknownFood(food_id.to_string()))?;
        Ok(food.calories_for(grams))
    }

    /// Add or replace a user food and persist the user food list. The list in
    /// memory is only changed once the save succeeded.
    pub fn add_user_food(
        &mut self,
        name: &str,
        calories_per_gram: f64,
        food_type: Option<String>,
        description: Option<String>,
    ) -> Result<Food, FoodError> {
        let food = Food::user_defined(name, calories_per_gram, food_type, description)?;

        let mut updated = self.user_foods.clone();
        match updated.iter_mut().find(|f| f.id == food.id) {
            Some(existing) => *existing = food.clone(),
            None => updated.push(food.clone()),
        }
        self.user_food_repository.save_user_foods(&updated)?;
        self.user_foods = updated;

        info!("Saved user food {} ({} kcal/g)", food.id, food.calories_per_gram);
        Ok(food)
    }

    /// The first hazard matching `query` for `species`, if any
    pub fn is_toxic_for(&self, query: &str, species: &str) -> Option<&Hazard> {
        let hazard = self.hazards.find_hazard(query, species);
        if hazard.is_some() {
            warn!("{} is flagged as hazardous for {}", query.trim(), species.trim());
        }
        hazard
    }

    /// Record a meal of `grams` of a catalog food, named "<food name> (<grams>g)"
    pub fn log_food(
        &self,
        pet: &mut Pet,
        food_id: &str,
        grams: f64,
        date: Option<DateTime<Utc>>,
    ) -> Result<MealEntry, FoodError> {
        validate_grams(grams)?;
        let food = self
            .resolve_food(food_id)
            .ok_or_else(|| FoodError::UnknownFood(food_id.to_string()))?;
        let meal_name = format!("{} ({}g)", food.name, grams);
        let meal = pet.add_meal(meal_name, food.calories_for(grams), date)?;
        info!("Logged {} for pet {}", meal.name(), pet.id());
        Ok(meal)
    }
}

fn validate_grams(grams: f64) -> Result<(), FoodError> {
    if !grams.is_finite() || grams <= 0.0 {
        return Err(FoodError::InvalidGrams(grams));
    }
    Ok(())
}
