//! Food catalog and toxicity hazard records.
//!
//! Catalog documents come from JSON files (`{ "foods": [...] }` and
//! `{ "items": [...] }`). Foods may state their energy density either as
//! `caloriesPerGram` or as `kcalPerKg`; both are normalized to calories per gram.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FoodValidationError {
    #[error("Food name cannot be empty")]
    EmptyName,
    #[error("Calories per gram must be a non-negative number (got {0})")]
    InvalidCaloriesPerGram(f64),
    #[error("Food entry needs either caloriesPerGram or kcalPerKg")]
    MissingEnergyDensity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFood")]
pub struct Food {
    pub id: String,
    pub name: String,
    pub calories_per_gram: f64,
    #[serde(rename = "type")]
    pub food_type: String,
    pub description: String,
}

/// Food as written in catalog documents
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFood {
    id: Option<String>,
    name: String,
    calories_per_gram: Option<f64>,
    kcal_per_kg: Option<f64>,
    #[serde(rename = "type", default)]
    food_type: String,
    #[serde(default)]
    description: String,
}

impl TryFrom<RawFood> for Food {
    type Error = FoodValidationError;

    fn try_from(raw: RawFood) -> Result<Self, Self::Error> {
        let calories_per_gram = match (raw.calories_per_gram, raw.kcal_per_kg) {
            (Some(per_gram), _) => per_gram,
            (None, Some(per_kg)) => per_kg / 1000.0,
            (None, None) => return Err(FoodValidationError::MissingEnergyDensity),
        };
        let id = raw
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Food::slug_for(&raw.name));
        Food::build(id, raw.name, calories_per_gram, raw.food_type, raw.description)
    }
}

impl Food {
    /// Create a user-defined food whose id is derived from its name
    pub fn user_defined(
        name: &str,
        calories_per_gram: f64,
        food_type: Option<String>,
        description: Option<String>,
    ) -> Result<Self, FoodValidationError> {
        Self::build(
            Self::slug_for(name),
            name.to_string(),
            calories_per_gram,
            food_type.unwrap_or_else(|| "custom".to_string()),
            description.unwrap_or_default(),
        )
    }

    fn build(
        id: String,
        name: String,
        calories_per_gram: f64,
        food_type: String,
        description: String,
    ) -> Result<Self, FoodValidationError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(FoodValidationError::EmptyName);
        }
        if !calories_per_gram.is_finite() || calories_per_gram < 0.0 {
            return Err(FoodValidationError::InvalidCaloriesPerGram(calories_per_gram));
        }
        Ok(Self {
            id,
            name,
            calories_per_gram,
            food_type,
            description,
        })
    }

    /// Slug used as the id of user-added foods: lowercased, whitespace runs
    /// collapsed into single dashes. "Chicken  Breast " -> "chicken-breast"
    pub fn slug_for(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Calories in `grams` of this food, rounded to the nearest whole calorie
    pub fn calories_for(&self, grams: f64) -> f64 {
        (self.calories_per_gram * grams).round()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalog {
    #[serde(default)]
    pub foods: Vec<Food>,
}

impl FoodCatalog {
    pub fn get(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }
}

/// A food hazard for one or more species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Lowercased aliases of the hazardous food
    pub names: Vec<String>,
    /// Lowercased species at risk; empty means every species
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub toxins: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub dose_notes: String,
}

impl Hazard {
    /// Both arguments must already be lowercased
    fn applies_to(&self, query: &str, species: &str) -> bool {
        let species_match = self.species.is_empty()
            || self.species.iter().any(|s| s.to_lowercase() == species);
        if !species_match {
            return false;
        }
        self.names.iter().any(|alias| {
            let alias = alias.to_lowercase();
            alias == query || query.contains(alias.as_str())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HazardCatalog {
    #[serde(default)]
    pub items: Vec<Hazard>,
}

impl HazardCatalog {
    /// First hazard whose species list covers `species` and whose aliases
    /// equal, or are contained in, `query`. No ranking: catalog order wins.
    pub fn find_hazard(&self, query: &str, species: &str) -> Option<&Hazard> {
        let query = query.trim().to_lowercase();
        let species = species.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.items.iter().find(|hazard| hazard.applies_to(&query, &species))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazards() -> HazardCatalog {
        serde_json::from_value(serde_json::json!({
            "items": [
                {
                    "names": ["grape", "raisin"],
                    "species": ["dog", "cat"],
                    "severity": "high",
                    "toxins": ["tartaric acid"],
                    "symptoms": ["vomiting", "kidney failure"],
                    "dose_notes": "Any amount"
                },
                {
                    "names": ["chocolate"],
                    "species": [],
                    "severity": "high"
                },
                {
                    "names": ["avocado"],
                    "species": ["bird"],
                    "severity": "moderate"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_exact_alias_and_species_match() {
        let catalog = hazards();
        let hazard = catalog.find_hazard("grape", "dog").unwrap();
        assert_eq!(hazard.severity, "high");
        assert!(catalog.find_hazard("grape", "bird").is_none());
    }

    #[test]
    fn test_alias_contained_in_query_matches_case_insensitively() {
        let catalog = hazards();
        assert!(catalog.find_hazard("Golden RAISINS", "Cat").is_some());
        assert!(catalog.find_hazard("dark chocolate bar", "hamster").is_some());
        assert!(catalog.find_hazard("kibble", "dog").is_none());
    }

    #[test]
    fn test_query_contained_in_alias_does_not_match() {
        let catalog = hazards();
        assert!(catalog.find_hazard("choc", "dog").is_none());
        assert!(catalog.find_hazard("   ", "dog").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut catalog = hazards();
        catalog.items.insert(
            0,
            Hazard {
                names: vec!["grape".to_string()],
                species: vec![],
                severity: "low".to_string(),
                toxins: vec![],
                symptoms: vec![],
                dose_notes: String::new(),
            },
        );
        assert_eq!(catalog.find_hazard("grape", "dog").unwrap().severity, "low");
    }

    #[test]
    fn test_food_parses_either_energy_unit() {
        let catalog: FoodCatalog = serde_json::from_value(serde_json::json!({
            "foods": [
                { "id": "kibble-std", "name": "Standard Kibble", "caloriesPerGram": 3.6, "type": "dry" },
                { "id": "wet-can", "name": "Wet Food", "kcalPerKg": 1100, "type": "wet", "description": "Canned" }
            ]
        }))
        .unwrap();

        assert_eq!(catalog.get("kibble-std").unwrap().calories_per_gram, 3.6);
        let wet = catalog.get("wet-can").unwrap();
        assert!((wet.calories_per_gram - 1.1).abs() < 1e-9);
        assert_eq!(wet.food_type, "wet");
        assert_eq!(wet.description, "Canned");
    }

    #[test]
    fn test_food_without_energy_density_is_rejected() {
        let result: Result<FoodCatalog, _> = serde_json::from_value(serde_json::json!({
            "foods": [{ "id": "mystery", "name": "Mystery Meat" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_slug_and_calories_rounding() {
        assert_eq!(Food::slug_for("  Chicken   Breast "), "chicken-breast");
        let food = Food::user_defined("Chicken Breast", 1.65, None, None).unwrap();
        assert_eq!(food.id, "chicken-breast");
        assert_eq!(food.food_type, "custom");
        assert_eq!(food.calories_for(100.0), 165.0);
        assert_eq!(food.calories_for(33.0), 54.0);
    }

    #[test]
    fn test_user_food_validation() {
        assert_eq!(
            Food::user_defined("  ", 1.0, None, None).unwrap_err(),
            FoodValidationError::EmptyName
        );
        assert!(Food::user_defined("Broth", -0.1, None, None).is_err());
    }
}
