//! Per-pet summary reports (console `report`).

use chrono::{DateTime, TimeZone};
use shared::{CalorieStatusReport, GoalStatus};

use super::models::owner::Owner;
use super::models::pet::{Pet, DEFAULT_GOAL_TOLERANCE_LB};

/// Snapshot of one pet's profile, goals and progress
#[derive(Debug, Clone, PartialEq)]
pub struct PetReport {
    pub name: String,
    pub species: String,
    pub age_years: f64,
    pub sex: String,
    pub latest_weight: Option<f64>,
    pub goal_weight: Option<f64>,
    pub daily_calorie_goal: Option<f64>,
    pub goal_status: GoalStatus,
    /// Calorie status for the calendar day of the report date
    pub calorie_status: CalorieStatusReport,
    pub weight_entries: usize,
    pub meal_entries: usize,
    /// Latest minus oldest weight, `None` without weights
    pub weight_change: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportService {
    goal_tolerance_lb: f64,
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(DEFAULT_GOAL_TOLERANCE_LB)
    }
}

impl ReportService {
    pub fn new(goal_tolerance_lb: f64) -> Self {
        Self { goal_tolerance_lb }
    }

    /// Goal status using the configured tolerance
    pub fn goal_status(&self, pet: &Pet) -> GoalStatus {
        pet.goal_status_with_tolerance(self.goal_tolerance_lb)
    }

    pub fn pet_report<Tz: TimeZone>(&self, pet: &Pet, on: &DateTime<Tz>) -> PetReport {
        PetReport {
            name: pet.name().to_string(),
            species: pet.species().to_string(),
            age_years: pet.age_years(),
            sex: pet.sex().to_string(),
            latest_weight: pet.latest_weight(),
            goal_weight: pet.goal_weight_lb(),
            daily_calorie_goal: pet.daily_calorie_goal(),
            goal_status: self.goal_status(pet),
            calorie_status: pet.calories_status_on(on),
            weight_entries: pet.weight_log().len(),
            meal_entries: pet.meals().len(),
            weight_change: pet.weight_change(),
        }
    }

    /// Reports for every pet of `owner`, or only the pet named `pet_name`.
    /// `None` when a name is given and no such pet exists.
    pub fn owner_report<Tz: TimeZone>(
        &self,
        owner: &Owner,
        pet_name: Option<&str>,
        on: &DateTime<Tz>,
    ) -> Option<Vec<PetReport>> {
        match pet_name {
            Some(name) => {
                let pet = owner.find_pet_by_name(name)?;
                Some(vec![self.pet_report(pet, on)])
            }
            None => Some(owner.pets().iter().map(|pet| self.pet_report(pet, on)).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::entries::WeightOptions;
    use crate::domain::models::pet::PetProfile;
    use chrono::Utc;
    use shared::CalorieStatus;

    fn report_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 4, 18, 0, 0).unwrap()
    }

    fn owner() -> Owner {
        let mut owner = Owner::new("Grace", None).unwrap();
        let mochi = owner
            .add_pet(Pet::new(PetProfile::named("Mochi").start_weight(32.0)).unwrap())
            .unwrap();
        mochi.set_goal_weight(28.0).unwrap();
        mochi.set_daily_calorie_goal(600.0).unwrap();
        mochi.add_weight(30.5, WeightOptions::default()).unwrap();
        mochi.add_meal("breakfast", 250.0, Some(report_day())).unwrap();
        owner
            .add_pet(Pet::new(PetProfile::named("Whiskers").species("cat")).unwrap())
            .unwrap();
        owner
    }

    #[test]
    fn test_pet_report_summarizes_progress() {
        let owner = owner();
        let now = report_day();
        let report = ReportService::default().pet_report(&owner.pets()[0], &now);

        assert_eq!(report.name, "Mochi");
        assert_eq!(report.latest_weight, Some(30.5));
        assert_eq!(report.goal_weight, Some(28.0));
        assert_eq!(report.goal_status, GoalStatus::Above);
        assert_eq!(report.calorie_status.status, CalorieStatus::Under);
        assert_eq!(report.calorie_status.intake, 250.0);
        assert_eq!(report.weight_entries, 2);
        assert_eq!(report.meal_entries, 1);
        assert_eq!(report.weight_change, Some(-1.5));
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let owner = owner();
        let now = report_day();
        let report = ReportService::new(3.0).pet_report(&owner.pets()[0], &now);
        assert_eq!(report.goal_status, GoalStatus::Met);
    }

    #[test]
    fn test_owner_report_all_or_one_pet() {
        let owner = owner();
        let service = ReportService::default();
        let now = report_day();

        let all = service.owner_report(&owner, None, &now).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].weight_change, None);
        assert_eq!(all[1].goal_status, GoalStatus::NoGoal);

        let one = service.owner_report(&owner, Some("Whiskers"), &now).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].species, "cat");

        assert!(service.owner_report(&owner, Some("Rex"), &now).is_none());
    }
}
