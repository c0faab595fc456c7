//! Domain model for a tracked pet.
//!
//! A pet owns its weight log (kept sorted ascending by date) and its meal list
//! (insertion order). Goal and calorie statuses are computed on demand and are
//! never stored.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use shared::{CalorieStatus, CalorieStatusReport, GoalStatus};

use super::entries::{EntryValidationError, MealEntry, WeightEntry, WeightOptions};
use super::ids::generate_id;

/// Default tolerance, in pounds, for considering a weight goal met
pub const DEFAULT_GOAL_TOLERANCE_LB: f64 = 0.5;

pub const DEFAULT_SPECIES: &str = "dog";
pub const DEFAULT_SEX: &str = "unknown";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PetValidationError {
    #[error("Pet name cannot be empty")]
    EmptyName,
    #[error("Age must be a non-negative number of years (got {0})")]
    InvalidAge(f64),
    #[error("Goal weight must be a positive number of pounds (got {0})")]
    InvalidGoalWeight(f64),
    #[error("Daily calorie goal must be a non-negative number (got {0})")]
    InvalidCalorieGoal(f64),
    #[error(transparent)]
    Entry(#[from] EntryValidationError),
}

/// Everything needed to create a pet
#[derive(Debug, Clone, PartialEq)]
pub struct PetProfile {
    pub name: String,
    pub species: String,
    pub sex: String,
    pub age_years: f64,
    pub photo_url: Option<String>,
    /// Seed weight, recorded as the oldest entry of the log
    pub start_weight_lb: Option<f64>,
}

impl PetProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: DEFAULT_SPECIES.to_string(),
            sex: DEFAULT_SEX.to_string(),
            age_years: 0.0,
            photo_url: None,
            start_weight_lb: None,
        }
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub fn start_weight(mut self, pounds: f64) -> Self {
        self.start_weight_lb = Some(pounds);
        self
    }
}

/// Partial update of a pet's profile (the edit-pet form)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetProfileUpdate {
    pub name: Option<String>,
    pub species: Option<String>,
    pub sex: Option<String>,
    pub age_years: Option<f64>,
    /// `Some(None)` clears the photo
    pub photo_url: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PetSnapshot")]
pub struct Pet {
    id: String,
    name: String,
    species: String,
    sex: String,
    age_years: f64,
    photo_url: Option<String>,
    goal_weight_lb: Option<f64>,
    daily_calorie_goal: Option<f64>,
    weight_log: Vec<WeightEntry>,
    meals: Vec<MealEntry>,
}

/// Deserialization shape of a pet; converted into a `Pet` with a sorted log
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PetSnapshot {
    id: String,
    name: String,
    #[serde(default = "default_species")]
    species: String,
    #[serde(default = "default_sex")]
    sex: String,
    #[serde(default)]
    age_years: f64,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    goal_weight_lb: Option<f64>,
    #[serde(default)]
    daily_calorie_goal: Option<f64>,
    #[serde(default)]
    weight_log: Vec<WeightEntry>,
    #[serde(default)]
    meals: Vec<MealEntry>,
}

fn default_species() -> String {
    DEFAULT_SPECIES.to_string()
}

fn default_sex() -> String {
    DEFAULT_SEX.to_string()
}

impl From<PetSnapshot> for Pet {
    fn from(snapshot: PetSnapshot) -> Self {
        let mut pet = Pet {
            id: snapshot.id,
            name: snapshot.name,
            species: snapshot.species,
            sex: snapshot.sex,
            age_years: snapshot.age_years,
            photo_url: snapshot.photo_url,
            goal_weight_lb: snapshot.goal_weight_lb,
            daily_calorie_goal: snapshot.daily_calorie_goal,
            weight_log: snapshot.weight_log,
            meals: snapshot.meals,
        };
        pet.sort_weight_log();
        pet
    }
}

impl Pet {
    pub fn new(profile: PetProfile) -> Result<Self, PetValidationError> {
        let name = profile.name.trim().to_string();
        if name.is_empty() {
            return Err(PetValidationError::EmptyName);
        }
        validate_age(profile.age_years)?;

        let mut weight_log = Vec::new();
        if let Some(pounds) = profile.start_weight_lb {
            weight_log.push(WeightEntry::new(
                pounds,
                WeightOptions::on(seed_weight_date()),
            )?);
        }

        Ok(Self {
            id: generate_id(),
            name,
            species: normalize_or(&profile.species, DEFAULT_SPECIES),
            sex: normalize_or(&profile.sex, DEFAULT_SEX),
            age_years: profile.age_years,
            photo_url: profile.photo_url.filter(|url| !url.trim().is_empty()),
            goal_weight_lb: None,
            daily_calorie_goal: None,
            weight_log,
            meals: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    pub fn age_years(&self) -> f64 {
        self.age_years
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn goal_weight_lb(&self) -> Option<f64> {
        self.goal_weight_lb
    }

    pub fn daily_calorie_goal(&self) -> Option<f64> {
        self.daily_calorie_goal
    }

    /// Weight entries, ascending by date
    pub fn weight_log(&self) -> &[WeightEntry] {
        &self.weight_log
    }

    /// Meal entries in the order they were recorded
    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    // ---- profile ----

    /// Apply a profile update. Name uniqueness is the owner's concern.
    pub fn update_profile(&mut self, update: PetProfileUpdate) -> Result<(), PetValidationError> {
        let name = match update.name {
            Some(name) => {
                let trimmed = name.trim().to_string();
                if trimmed.is_empty() {
                    return Err(PetValidationError::EmptyName);
                }
                Some(trimmed)
            }
            None => None,
        };
        if let Some(age) = update.age_years {
            validate_age(age)?;
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(species) = update.species {
            self.species = normalize_or(&species, DEFAULT_SPECIES);
        }
        if let Some(sex) = update.sex {
            self.sex = normalize_or(&sex, DEFAULT_SEX);
        }
        if let Some(age) = update.age_years {
            self.age_years = age;
        }
        if let Some(photo_url) = update.photo_url {
            self.photo_url = photo_url.filter(|url| !url.trim().is_empty());
        }
        Ok(())
    }

    // ---- goals ----

    pub fn set_goal_weight(&mut self, pounds: f64) -> Result<(), PetValidationError> {
        if !pounds.is_finite() || pounds <= 0.0 {
            return Err(PetValidationError::InvalidGoalWeight(pounds));
        }
        self.goal_weight_lb = Some(pounds);
        Ok(())
    }

    pub fn clear_goal_weight(&mut self) {
        self.goal_weight_lb = None;
    }

    pub fn set_daily_calorie_goal(&mut self, kcal: f64) -> Result<(), PetValidationError> {
        if !kcal.is_finite() || kcal < 0.0 {
            return Err(PetValidationError::InvalidCalorieGoal(kcal));
        }
        self.daily_calorie_goal = Some(kcal);
        Ok(())
    }

    pub fn clear_daily_calorie_goal(&mut self) {
        self.daily_calorie_goal = None;
    }

    // ---- weights ----

    /// Record a weight and keep the log sorted by date. Entries sharing a date
    /// keep their insertion order.
    pub fn add_weight(
        &mut self,
        pounds: f64,
        options: WeightOptions,
    ) -> Result<WeightEntry, PetValidationError> {
        let entry = WeightEntry::new(pounds, options)?;
        self.weight_log.push(entry.clone());
        self.sort_weight_log();
        Ok(entry)
    }

    /// Weight of the latest-dated entry, not the most recently inserted one
    pub fn latest_weight(&self) -> Option<f64> {
        self.weight_log.last().map(WeightEntry::pounds)
    }

    /// Difference between the latest and the oldest logged weight
    pub fn weight_change(&self) -> Option<f64> {
        let first = self.weight_log.first()?;
        let last = self.weight_log.last()?;
        Some(last.pounds() - first.pounds())
    }

    pub fn goal_status(&self) -> GoalStatus {
        self.goal_status_with_tolerance(DEFAULT_GOAL_TOLERANCE_LB)
    }

    pub fn goal_status_with_tolerance(&self, tolerance_lb: f64) -> GoalStatus {
        let Some(goal) = self.goal_weight_lb else {
            return GoalStatus::NoGoal;
        };
        let Some(latest) = self.latest_weight() else {
            return GoalStatus::NoWeight;
        };

        if (latest - goal).abs() <= tolerance_lb {
            GoalStatus::Met
        } else if latest > goal {
            GoalStatus::Above
        } else {
            GoalStatus::Below
        }
    }

    /// Weight entries recorded on the calendar day `day` as seen in `tz`
    pub fn weights_on_day<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> Vec<&WeightEntry> {
        self.weight_log
            .iter()
            .filter(|entry| calendar_day(entry.date(), tz) == day)
            .collect()
    }

    // ---- meals & calories ----

    pub fn add_meal(
        &mut self,
        name: impl Into<String>,
        calories: f64,
        date: Option<DateTime<Utc>>,
    ) -> Result<MealEntry, PetValidationError> {
        let meal = MealEntry::new(name, calories, date)?;
        self.meals.push(meal.clone());
        Ok(meal)
    }

    /// Meals recorded on the calendar day `day` as seen in `tz`
    pub fn meals_on_day<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> Vec<&MealEntry> {
        self.meals
            .iter()
            .filter(|meal| calendar_day(meal.date(), tz) == day)
            .collect()
    }

    /// Total calories of meals sharing the calendar day of `date`, in `date`'s time zone
    pub fn calories_on<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> f64 {
        self.calories_on_day(date.date_naive(), &date.timezone())
    }

    pub fn calories_on_day<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> f64 {
        self.meals_on_day(day, tz)
            .into_iter()
            .map(MealEntry::calories)
            .sum()
    }

    pub fn calories_status_on<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> CalorieStatusReport {
        self.calories_status_on_day(date.date_naive(), &date.timezone())
    }

    /// Compare a day's intake to the daily goal. `Met` requires exact equality.
    pub fn calories_status_on_day<Tz: TimeZone>(
        &self,
        day: NaiveDate,
        tz: &Tz,
    ) -> CalorieStatusReport {
        let intake = self.calories_on_day(day, tz);
        let status = match self.daily_calorie_goal {
            None => CalorieStatus::NoGoal,
            Some(goal) if intake < goal => CalorieStatus::Under,
            Some(goal) if intake == goal => CalorieStatus::Met,
            Some(_) => CalorieStatus::Over,
        };
        CalorieStatusReport { status, intake }
    }

    // ---- serialization ----

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    fn sort_weight_log(&mut self) {
        // Vec::sort_by_key is stable
        self.weight_log.sort_by_key(WeightEntry::date);
    }
}

/// Unix epoch, far enough in the past that any later weigh-in is the latest one
pub fn seed_weight_date() -> DateTime<Utc> {
    DateTime::<Utc>::from(std::time::UNIX_EPOCH)
}

fn calendar_day<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

fn validate_age(age_years: f64) -> Result<(), PetValidationError> {
    if !age_years.is_finite() || age_years < 0.0 {
        return Err(PetValidationError::InvalidAge(age_years));
    }
    Ok(())
}

fn normalize_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn mochi() -> Pet {
        Pet::new(PetProfile::named("Mochi").start_weight(32.0)).unwrap()
    }

    #[test]
    fn test_creates_with_start_weight_and_computes_goal_status() {
        let mut pet = mochi();
        assert_eq!(pet.latest_weight(), Some(32.0));
        assert_eq!(pet.weight_log()[0].date(), seed_weight_date());
        assert_eq!(pet.goal_status(), GoalStatus::NoGoal);

        pet.set_goal_weight(28.0).unwrap();
        assert_eq!(pet.goal_status(), GoalStatus::Above);

        pet.add_weight(28.3, WeightOptions::default()).unwrap();
        assert_eq!(pet.goal_status(), GoalStatus::Met);
    }

    #[test]
    fn test_cleared_goals_report_no_goal() {
        let mut pet = mochi();
        pet.set_goal_weight(28.0).unwrap();
        pet.set_daily_calorie_goal(600.0).unwrap();
        let day = utc(2025, 10, 4, 12);
        pet.add_meal("breakfast", 250.0, Some(day)).unwrap();
        assert_eq!(pet.calories_status_on(&day).status, CalorieStatus::Under);

        pet.clear_goal_weight();
        pet.clear_daily_calorie_goal();
        assert_eq!(pet.goal_weight_lb(), None);
        assert_eq!(pet.daily_calorie_goal(), None);
        assert_eq!(pet.goal_status(), GoalStatus::NoGoal);
        assert_eq!(
            pet.calories_status_on(&day),
            CalorieStatusReport { status: CalorieStatus::NoGoal, intake: 250.0 }
        );
    }

    #[test]
    fn test_goal_status_no_weight_and_below() {
        let mut pet = Pet::new(PetProfile::named("Biscuit")).unwrap();
        pet.set_goal_weight(20.0).unwrap();
        assert_eq!(pet.goal_status(), GoalStatus::NoWeight);

        pet.add_weight(18.0, WeightOptions::default()).unwrap();
        assert_eq!(pet.goal_status(), GoalStatus::Below);
    }

    #[test]
    fn test_goal_status_tolerance_boundary_is_inclusive() {
        let mut pet = Pet::new(PetProfile::named("Biscuit")).unwrap();
        pet.set_goal_weight(20.0).unwrap();
        pet.add_weight(20.5, WeightOptions::default()).unwrap();
        assert_eq!(pet.goal_status(), GoalStatus::Met);
        assert_eq!(pet.goal_status_with_tolerance(0.25), GoalStatus::Above);
    }

    #[test]
    fn test_sorts_weights_by_date() {
        let mut pet = Pet::new(PetProfile::named("Mochi")).unwrap();
        pet.add_weight(33.0, WeightOptions::on(utc(2025, 9, 30, 0))).unwrap();
        pet.add_weight(31.6, WeightOptions::on(utc(2025, 10, 3, 0))).unwrap();
        pet.add_weight(32.2, WeightOptions::on(utc(2025, 10, 1, 0))).unwrap();

        let pounds: Vec<f64> = pet.weight_log().iter().map(WeightEntry::pounds).collect();
        assert_eq!(pounds, vec![33.0, 32.2, 31.6]);
        assert_eq!(pet.latest_weight(), Some(31.6));
        assert!((pet.weight_change().unwrap() - (-1.4)).abs() < 1e-9);
    }

    #[test]
    fn test_backdated_weight_does_not_become_latest() {
        let mut pet = Pet::new(PetProfile::named("Mochi")).unwrap();
        let now = Utc::now();
        pet.add_weight(30.0, WeightOptions::on(now)).unwrap();
        pet.add_weight(40.0, WeightOptions::on(now - Duration::days(7))).unwrap();
        assert_eq!(pet.latest_weight(), Some(30.0));
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let mut pet = Pet::new(PetProfile::named("Mochi")).unwrap();
        let when = utc(2025, 10, 1, 12);
        pet.add_weight(10.0, WeightOptions::on(when)).unwrap();
        pet.add_weight(11.0, WeightOptions::on(when)).unwrap();
        assert_eq!(pet.latest_weight(), Some(11.0));
    }

    #[test]
    fn test_logs_meals_and_reports_daily_calorie_status() {
        let mut pet = Pet::new(PetProfile::named("Mochi")).unwrap();
        let day = utc(2025, 10, 4, 0);
        assert_eq!(pet.calories_status_on(&day).status, CalorieStatus::NoGoal);

        pet.set_daily_calorie_goal(600.0).unwrap();
        pet.add_meal("breakfast", 250.0, Some(day)).unwrap();
        assert_eq!(
            pet.calories_status_on(&day),
            CalorieStatusReport { status: CalorieStatus::Under, intake: 250.0 }
        );

        pet.add_meal("dinner", 350.0, Some(day)).unwrap();
        assert_eq!(
            pet.calories_status_on(&day),
            CalorieStatusReport { status: CalorieStatus::Met, intake: 600.0 }
        );

        pet.add_meal("treat", 50.0, Some(day)).unwrap();
        assert_eq!(
            pet.calories_status_on(&day),
            CalorieStatusReport { status: CalorieStatus::Over, intake: 650.0 }
        );
    }

    #[test]
    fn test_calories_on_uses_calendar_day_not_24h_window() {
        let mut pet = Pet::new(PetProfile::named("Mochi")).unwrap();
        pet.add_meal("late dinner", 300.0, Some(utc(2025, 10, 4, 23))).unwrap();
        pet.add_meal("breakfast", 200.0, Some(utc(2025, 10, 5, 1))).unwrap();
        pet.add_meal("yesterday", 100.0, Some(utc(2025, 10, 3, 12))).unwrap();

        assert_eq!(pet.calories_on(&utc(2025, 10, 4, 0)), 300.0);
        assert_eq!(pet.calories_on(&utc(2025, 10, 5, 22)), 200.0);
    }

    #[test]
    fn test_calories_on_respects_reference_time_zone() {
        let mut pet = Pet::new(PetProfile::named("Mochi")).unwrap();
        // 2025-10-05 02:00 UTC is still 2025-10-04 in UTC-05:00
        pet.add_meal("late snack", 80.0, Some(utc(2025, 10, 5, 2))).unwrap();

        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let reference = eastern.with_ymd_and_hms(2025, 10, 4, 9, 0, 0).unwrap();
        assert_eq!(pet.calories_on(&reference), 80.0);
        assert_eq!(pet.calories_on(&utc(2025, 10, 4, 9)), 0.0);
    }

    #[test]
    fn test_entries_on_day_filters() {
        let mut pet = Pet::new(PetProfile::named("Mochi")).unwrap();
        pet.add_weight(30.0, WeightOptions::on(utc(2025, 10, 4, 8))).unwrap();
        pet.add_weight(29.5, WeightOptions::on(utc(2025, 10, 6, 8))).unwrap();
        pet.add_meal("kibble", 250.0, Some(utc(2025, 10, 4, 9))).unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
        assert_eq!(pet.weights_on_day(day, &Utc).len(), 1);
        assert_eq!(pet.meals_on_day(day, &Utc).len(), 1);
        assert!(pet.meals_on_day(day.succ_opt().unwrap(), &Utc).is_empty());
    }

    #[test]
    fn test_invalid_goals_are_rejected_without_changing_state() {
        let mut pet = mochi();
        pet.set_goal_weight(28.0).unwrap();
        assert_eq!(
            pet.set_goal_weight(-1.0),
            Err(PetValidationError::InvalidGoalWeight(-1.0))
        );
        assert!(pet.set_goal_weight(f64::NAN).is_err());
        assert_eq!(pet.goal_weight_lb(), Some(28.0));

        assert!(pet.set_daily_calorie_goal(-5.0).is_err());
        assert_eq!(pet.daily_calorie_goal(), None);
        pet.set_daily_calorie_goal(0.0).unwrap();
        assert_eq!(pet.daily_calorie_goal(), Some(0.0));

        pet.clear_goal_weight();
        assert_eq!(pet.goal_status(), GoalStatus::NoGoal);
    }

    #[test]
    fn test_invalid_entries_leave_logs_untouched() {
        let mut pet = mochi();
        assert!(pet.add_weight(0.0, WeightOptions::default()).is_err());
        assert!(pet.add_meal("treat", -10.0, None).is_err());
        assert_eq!(pet.weight_log().len(), 1);
        assert!(pet.meals().is_empty());
    }

    #[test]
    fn test_new_pet_validation_and_defaults() {
        assert_eq!(
            Pet::new(PetProfile::named("   ")),
            Err(PetValidationError::EmptyName)
        );
        let mut profile = PetProfile::named("Old Timer");
        profile.age_years = -2.0;
        assert_eq!(Pet::new(profile), Err(PetValidationError::InvalidAge(-2.0)));

        let mut profile = PetProfile::named(" Rex ");
        profile.species = "".to_string();
        let pet = Pet::new(profile).unwrap();
        assert_eq!(pet.name(), "Rex");
        assert_eq!(pet.species(), DEFAULT_SPECIES);
        assert_eq!(pet.sex(), DEFAULT_SEX);
        assert!(pet.weight_log().is_empty());
    }

    #[test]
    fn test_update_profile() {
        let mut pet = mochi();
        pet.update_profile(PetProfileUpdate {
            name: Some("Mochi II".to_string()),
            age_years: Some(5.0),
            photo_url: Some(Some("https://example.com/m.png".to_string())),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(pet.name(), "Mochi II");
        assert_eq!(pet.age_years(), 5.0);
        assert_eq!(pet.photo_url(), Some("https://example.com/m.png"));

        pet.update_profile(PetProfileUpdate {
            photo_url: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(pet.photo_url(), None);

        assert!(pet
            .update_profile(PetProfileUpdate {
                name: Some(" ".to_string()),
                ..Default::default()
            })
            .is_err());
        assert_eq!(pet.name(), "Mochi II");
    }

    #[test]
    fn test_json_round_trip_restores_entries_and_goals() {
        let mut pet = mochi();
        pet.set_goal_weight(28.0).unwrap();
        pet.set_daily_calorie_goal(600.0).unwrap();
        pet.add_weight(30.1, WeightOptions::on(utc(2025, 10, 1, 0)).with_note("vet"))
            .unwrap();
        pet.add_meal("kibble", 250.0, Some(utc(2025, 10, 4, 8))).unwrap();

        let json = pet.to_json().unwrap();
        assert!(json.get("weightLog").is_some());
        assert!(json.get("goalWeightLb").is_some());

        let restored = Pet::from_json(json).unwrap();
        assert_eq!(restored, pet);
        assert_eq!(restored.weight_log()[1].note(), "vet");
        assert_eq!(restored.calories_on(&utc(2025, 10, 4, 0)), 250.0);
    }

    #[test]
    fn test_deserialization_sorts_an_unsorted_log() {
        let json = serde_json::json!({
            "id": "pet1",
            "name": "Mochi",
            "weightLog": [
                { "id": "w2", "pounds": 31.0, "date": "2025-10-03T00:00:00Z" },
                { "id": "w1", "pounds": 33.0, "date": "2025-09-30T00:00:00Z" }
            ]
        });
        let pet = Pet::from_json(json).unwrap();
        assert_eq!(pet.weight_log()[0].id(), "w1");
        assert_eq!(pet.latest_weight(), Some(31.0));
        assert_eq!(pet.species(), DEFAULT_SPECIES);
        assert!(pet.meals().is_empty());
    }
}
