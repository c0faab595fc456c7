//! backend/src/io/rest/mappers/pet_mapper.rs

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use shared::{
    CreatePetRequest, MealEntryDto, PetDetail, PetSummary, UpdatePetRequest, WeightEntryDto,
};

use crate::domain::models::entries::{MealEntry, WeightEntry};
use crate::domain::models::pet::{Pet, PetProfile, PetProfileUpdate, DEFAULT_SEX, DEFAULT_SPECIES};
use crate::domain::ReportService;

/// Mapper between the pet DTOs and the domain pet
pub struct PetMapper;

impl PetMapper {
    pub fn to_summary(pet: &Pet) -> PetSummary {
        PetSummary {
            id: pet.id().to_string(),
            name: pet.name().to_string(),
            species: pet.species().to_string(),
            sex: pet.sex().to_string(),
            age_years: pet.age_years(),
            latest_weight_lb: pet.latest_weight(),
        }
    }

    pub fn to_weight_dto(entry: &WeightEntry) -> WeightEntryDto {
        WeightEntryDto {
            id: entry.id().to_string(),
            pounds: entry.pounds(),
            date: entry.date().to_rfc3339(),
            note: entry.note().to_string(),
            image_url: entry.image_url().map(str::to_string),
        }
    }

    pub fn to_meal_dto(meal: &MealEntry) -> MealEntryDto {
        MealEntryDto {
            id: meal.id().to_string(),
            name: meal.name().to_string(),
            calories: meal.calories(),
            date: meal.date().to_rfc3339(),
        }
    }

    /// Full pet view; the calorie status refers to the calendar day of `today`
    pub fn to_detail<Tz: TimeZone>(
        pet: &Pet,
        reports: &ReportService,
        today: &DateTime<Tz>,
    ) -> PetDetail {
        PetDetail {
            id: pet.id().to_string(),
            name: pet.name().to_string(),
            species: pet.species().to_string(),
            sex: pet.sex().to_string(),
            age_years: pet.age_years(),
            photo_url: pet.photo_url().map(str::to_string),
            goal_weight_lb: pet.goal_weight_lb(),
            daily_calorie_goal: pet.daily_calorie_goal(),
            latest_weight_lb: pet.latest_weight(),
            weight_log: pet.weight_log().iter().map(Self::to_weight_dto).collect(),
            meals: pet.meals().iter().map(Self::to_meal_dto).collect(),
            goal_status: reports.goal_status(pet),
            calorie_status: pet.calories_status_on(today),
        }
    }

    pub fn to_profile(request: CreatePetRequest) -> PetProfile {
        PetProfile {
            name: request.name,
            species: request.species.unwrap_or_else(|| DEFAULT_SPECIES.to_string()),
            sex: request.sex.unwrap_or_else(|| DEFAULT_SEX.to_string()),
            age_years: request.age_years.unwrap_or(0.0),
            photo_url: request.photo_url,
            start_weight_lb: request.start_weight_lb,
        }
    }

    /// An empty `photo_url` clears the photo
    pub fn to_profile_update(request: UpdatePetRequest) -> PetProfileUpdate {
        PetProfileUpdate {
            name: request.name,
            species: request.species,
            sex: request.sex,
            age_years: request.age_years,
            photo_url: request
                .photo_url
                .map(|url| Some(url).filter(|url| !url.trim().is_empty())),
        }
    }

    /// Parse an optional request timestamp. Accepts RFC 3339, or a bare
    /// `YYYY-MM-DD` which is taken as local noon of that day.
    pub fn parse_timestamp(value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Ok(Some(timestamp.with_timezone(&Utc)));
        }
        let day = Self::parse_day(value)?;
        let noon = day
            .and_hms_opt(12, 0, 0)
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
            .ok_or_else(|| anyhow!("Invalid local date: {}", value))?;
        Ok(Some(noon.with_timezone(&Utc)))
    }

    pub fn parse_day(value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| anyhow!("Invalid date '{}', expected YYYY-MM-DD", value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::entries::WeightOptions;
    use shared::{CalorieStatus, GoalStatus};

    #[test]
    fn test_to_detail_includes_logs_and_statuses() {
        let mut pet = Pet::new(PetProfile::named("Mochi").start_weight(32.0)).unwrap();
        pet.set_goal_weight(28.0).unwrap();
        let day = Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap();
        pet.add_weight(31.0, WeightOptions::on(day)).unwrap();
        pet.add_meal("kibble", 250.0, Some(day)).unwrap();

        let detail = PetMapper::to_detail(&pet, &ReportService::default(), &day);
        assert_eq!(detail.latest_weight_lb, Some(31.0));
        assert_eq!(detail.weight_log.len(), 2);
        assert_eq!(detail.weight_log[1].date, "2025-10-04T12:00:00+00:00");
        assert_eq!(detail.goal_status, GoalStatus::Above);
        assert_eq!(detail.calorie_status.status, CalorieStatus::NoGoal);
        assert_eq!(detail.calorie_status.intake, 250.0);
    }

    #[test]
    fn test_profile_defaults_and_photo_clearing() {
        let profile = PetMapper::to_profile(CreatePetRequest {
            name: "Mochi".to_string(),
            species: None,
            sex: None,
            age_years: None,
            start_weight_lb: Some(32.0),
            photo_url: None,
        });
        assert_eq!(profile.species, DEFAULT_SPECIES);
        assert_eq!(profile.age_years, 0.0);
        assert_eq!(profile.start_weight_lb, Some(32.0));

        let update = PetMapper::to_profile_update(UpdatePetRequest {
            photo_url: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(update.photo_url, Some(None));
        assert_eq!(PetMapper::to_profile_update(UpdatePetRequest::default()).photo_url, None);
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(PetMapper::parse_timestamp(None).unwrap(), None);
        assert_eq!(PetMapper::parse_timestamp(Some("  ")).unwrap(), None);
        assert_eq!(
            PetMapper::parse_timestamp(Some("2025-10-04T08:30:00Z")).unwrap(),
            Some(Utc.with_ymd_and_hms(2025, 10, 4, 8, 30, 0).unwrap())
        );

        let local_noon = PetMapper::parse_timestamp(Some("2025-10-04")).unwrap().unwrap();
        assert_eq!(
            local_noon.with_timezone(&Local).date_naive(),
            NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()
        );
        assert!(PetMapper::parse_timestamp(Some("yesterday")).is_err());
    }
}
