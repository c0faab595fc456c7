//! Domain models for weight and meal log entries.
//!
//! Entries are value records: they are validated when constructed and are
//! never modified afterwards. The owning pet only hands out shared references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::generate_id;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryValidationError {
    #[error("Weight must be a positive number of pounds (got {0})")]
    NonPositiveWeight(f64),
    #[error("Calories must be a non-negative number (got {0})")]
    NegativeCalories(f64),
    #[error("Meal name cannot be empty")]
    EmptyMealName,
}

/// Optional fields accepted when recording a weight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightOptions {
    /// Defaults to the current time
    pub date: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub image_url: Option<String>,
}

impl WeightOptions {
    pub fn on(date: DateTime<Utc>) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A single weigh-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    id: String,
    pounds: f64,
    date: DateTime<Utc>,
    #[serde(default)]
    note: String,
    #[serde(default)]
    image_url: Option<String>,
}

impl WeightEntry {
    pub fn new(pounds: f64, options: WeightOptions) -> Result<Self, EntryValidationError> {
        if !pounds.is_finite() || pounds <= 0.0 {
            return Err(EntryValidationError::NonPositiveWeight(pounds));
        }

        Ok(Self {
            id: generate_id(),
            pounds,
            date: options.date.unwrap_or_else(Utc::now),
            note: options.note.unwrap_or_default(),
            image_url: options.image_url.filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pounds(&self) -> f64 {
        self.pounds
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// A single meal or treat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    id: String,
    name: String,
    calories: f64,
    date: DateTime<Utc>,
}

impl MealEntry {
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        date: Option<DateTime<Utc>>,
    ) -> Result<Self, EntryValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(EntryValidationError::EmptyMealName);
        }
        if !calories.is_finite() || calories < 0.0 {
            return Err(EntryValidationError::NegativeCalories(calories));
        }

        Ok(Self {
            id: generate_id(),
            name,
            calories,
            date: date.unwrap_or_else(Utc::now),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weight_entry_serializes_with_camel_case_fields() {
        let date = Utc.with_ymd_and_hms(2025, 10, 4, 0, 0, 0).unwrap();
        let entry = WeightEntry::new(
            32.0,
            WeightOptions {
                date: Some(date),
                note: Some("start".to_string()),
                image_url: Some("https://example.com/mochi.jpg".to_string()),
            },
        )
        .unwrap();

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["pounds"], 32.0);
        assert_eq!(json["note"], "start");
        assert_eq!(json["imageUrl"], "https://example.com/mochi.jpg");
        assert_eq!(json["date"], "2025-10-04T00:00:00Z");

        let restored: WeightEntry = serde_json::from_value(json).unwrap();
        assert_eq!(restored, entry);
        assert_eq!(restored.id(), entry.id());
    }

    #[test]
    fn test_weight_entry_rejects_non_positive_and_nan() {
        assert_eq!(
            WeightEntry::new(0.0, WeightOptions::default()),
            Err(EntryValidationError::NonPositiveWeight(0.0))
        );
        assert!(WeightEntry::new(-3.5, WeightOptions::default()).is_err());
        assert!(WeightEntry::new(f64::NAN, WeightOptions::default()).is_err());
    }

    #[test]
    fn test_weight_entry_defaults() {
        let before = Utc::now();
        let entry = WeightEntry::new(12.5, WeightOptions::default()).unwrap();
        assert!(entry.date() >= before);
        assert_eq!(entry.note(), "");
        assert_eq!(entry.image_url(), None);
    }

    #[test]
    fn test_meal_entry_round_trip_keeps_id() {
        let date = Utc.with_ymd_and_hms(2025, 10, 4, 8, 0, 0).unwrap();
        let meal = MealEntry::new("kibble", 250.0, Some(date)).unwrap();

        let json = serde_json::to_string(&meal).unwrap();
        let restored: MealEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id(), meal.id());
        assert_eq!(restored.calories(), 250.0);
        assert_eq!(restored.date(), date);
    }

    #[test]
    fn test_meal_entry_validation() {
        assert_eq!(
            MealEntry::new("  ", 10.0, None),
            Err(EntryValidationError::EmptyMealName)
        );
        assert_eq!(
            MealEntry::new("treat", -1.0, None),
            Err(EntryValidationError::NegativeCalories(-1.0))
        );
        // Zero-calorie entries (water, a chew toy) are allowed
        assert!(MealEntry::new("water", 0.0, None).is_ok());
    }
}
