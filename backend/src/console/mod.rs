//! # Console
//!
//! A line-oriented front end over the [`Tracker`]. Each input line is parsed
//! into a [`Command`], executed against the tracker and answered with a list
//! of output lines. Success lines start with ✅, failures with ❌.
//!
//! Calendar days (today's calories, `meals [date]`, ...) are local days.
//! `save [key]` and `load <key>` store the whole session (owners plus the
//! current selection) in the key-value store.

pub mod command;
pub mod format;

pub use command::{Command, CommandError};

use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use crate::domain::models::entries::WeightOptions;
use crate::domain::models::pet::{
    PetProfile, PetProfileUpdate, PetValidationError, DEFAULT_SEX, DEFAULT_SPECIES,
};
use crate::domain::{FoodError, FoodService, ReportService, Tracker, TrackerError};
use crate::storage::json::{SessionDocument, SessionRepository, DEFAULT_SESSION_KEY};

/// Errors rendered as a single `❌` line
#[derive(Debug, thiserror::Error)]
enum ConsoleError {
    #[error("No owner selected. Create or select an owner first.")]
    OwnerRequired,
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Pet(#[from] PetValidationError),
    #[error(transparent)]
    Food(#[from] FoodError),
}

type Lines = Result<Vec<String>, ConsoleError>;

/// Response to one input line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleOutput {
    pub lines: Vec<String>,
    pub clear_screen: bool,
    pub exit: bool,
}

impl ConsoleOutput {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Default::default()
        }
    }
}

pub struct Console {
    tracker: Tracker,
    food_service: FoodService,
    sessions: SessionRepository,
    reports: ReportService,
}

impl Console {
    pub fn new(
        food_service: FoodService,
        sessions: SessionRepository,
        reports: ReportService,
    ) -> Self {
        Self {
            tracker: Tracker::new(),
            food_service,
            sessions,
            reports,
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn welcome() -> Vec<String> {
        vec![
            String::new(),
            "🐾 Welcome to the LeanPawgress Pet Console! 🐾".to_string(),
            "Type \"help\" to see available commands".to_string(),
            "Type \"exit\" to quit".to_string(),
            String::new(),
        ]
    }

    pub fn handle_line(&mut self, line: &str) -> ConsoleOutput {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return ConsoleOutput::default(),
            Err(CommandError::Unknown(word)) => {
                return ConsoleOutput::lines(vec![
                    format!("❌ Unknown command: {}", word),
                    "Type \"help\" for available commands".to_string(),
                ]);
            }
            Err(e) => return ConsoleOutput::lines(vec![format!("❌ {}", e)]),
        };

        debug!("Console command: {:?}", command);
        match command {
            Command::Clear => ConsoleOutput {
                clear_screen: true,
                ..Default::default()
            },
            Command::Exit => ConsoleOutput {
                lines: vec!["Goodbye! 👋".to_string()],
                exit: true,
                ..Default::default()
            },
            command => match self.execute(command) {
                Ok(lines) => ConsoleOutput::lines(lines),
                Err(e) => ConsoleOutput::lines(vec![format!("❌ {}", e)]),
            },
        }
    }

    fn execute(&mut self, command: Command) -> Lines {
        match command {
            Command::Help => Ok(help()),
            Command::CreateOwner { name, email } => self.create_owner(&name, email),
            Command::SelectOwner(name) => {
                let owner = self.tracker.select_owner(&name)?;
                Ok(vec![format!("✅ Selected owner: {}", owner.name())])
            }
            Command::ListOwners => Ok(self.list_owners()),
            Command::CurrentOwner => self.current_owner(),
            Command::CreatePet {
                name,
                species,
                sex,
                age_years,
                start_weight_lb,
            } => self.create_pet(PetProfile {
                name,
                species: species.unwrap_or_else(|| DEFAULT_SPECIES.to_string()),
                sex: sex.unwrap_or_else(|| DEFAULT_SEX.to_string()),
                age_years: age_years.unwrap_or(0.0),
                photo_url: None,
                start_weight_lb,
            }),
            Command::ListPets => self.list_pets(),
            Command::SelectPet(name) => {
                let pet = self.tracker.select_pet(&name)?;
                Ok(vec![format!("✅ Selected pet: {}", pet.name())])
            }
            Command::CurrentPet => self.current_pet(),
            Command::EditPet {
                name,
                species,
                sex,
                age_years,
                photo_url,
            } => self.edit_pet(PetProfileUpdate {
                name: Some(name),
                species,
                sex,
                age_years,
                photo_url: photo_url.map(Some),
            }),
            Command::RemovePet(name) => self.remove_pet(&name),
            Command::AddWeight { pounds, note } => self.add_weight(pounds, note),
            Command::Weights => self.weights(),
            Command::WeightsHistory(day) => self.weights_history(day),
            Command::SetGoal(pounds) => {
                self.tracker.current_pet_mut()?.set_goal_weight(pounds)?;
                Ok(vec![format!("✅ Set goal weight: {} lbs", pounds)])
            }
            Command::AddMeal { name, calories } => {
                let meal = self.tracker.current_pet_mut()?.add_meal(name, calories, None)?;
                Ok(vec![
                    format!("✅ Added meal: {} ({} calories)", meal.name(), meal.calories()),
                    format!("   Date: {}", format::local_day(meal.date())),
                ])
            }
            Command::AddFood { food_id, grams } => {
                let pet = self.tracker.current_pet_mut()?;
                let meal = self.food_service.log_food(pet, &food_id, grams, None)?;
                Ok(vec![
                    format!("✅ Added food: {} ({} calories)", meal.name(), meal.calories()),
                    format!("   Date: {}", format::local_day(meal.date())),
                ])
            }
            Command::Foods => Ok(self.foods()),
            Command::CheckFood(query) => Ok(self.check_food(&query)),
            Command::Meals(day) => self.meals(day, false),
            Command::MealsHistory(day) => self.meals(day, true),
            Command::SetCalorieGoal(kcal) => {
                self.tracker.current_pet_mut()?.set_daily_calorie_goal(kcal)?;
                Ok(vec![format!("✅ Set daily calorie goal: {} kcal", kcal)])
            }
            Command::Status => self.status(),
            Command::Calories(day) => self.calories(day),
            Command::Report(pet_name) => self.report(pet_name.as_deref()),
            Command::Save(key) => Ok(self.save(key.as_deref().unwrap_or(DEFAULT_SESSION_KEY))),
            Command::Load(key) => Ok(self.load(&key)),
            Command::Clear | Command::Exit => Ok(Vec::new()),
        }
    }

    // ---- owners ----

    fn create_owner(&mut self, name: &str, email: Option<String>) -> Lines {
        let owner = self.tracker.create_owner(name, email)?;
        let mut lines = vec![format!("✅ Created owner: {}", owner.name())];
        if let Some(email) = owner.email() {
            lines.push(format!("   Email: {}", email));
        }
        Ok(lines)
    }

    fn list_owners(&self) -> Vec<String> {
        if self.tracker.owners().is_empty() {
            return vec!["📝 No owners created yet".to_string()];
        }

        let current_id = self.tracker.current_owner().ok().map(|o| o.id().to_string());
        let mut lines = vec![String::new(), "👤 Owners:".to_string()];
        for owner in self.tracker.owners() {
            let current = if current_id.as_deref() == Some(owner.id()) { " (current)" } else { "" };
            lines.push(format!(
                "  {}{}: {}",
                owner.name(),
                current,
                format::pet_count(owner.pets().len())
            ));
        }
        lines
    }

    fn current_owner(&self) -> Lines {
        let owner = self.tracker.current_owner()?;
        let mut lines = vec![String::new(), format!("👤 Current Owner: {}", owner.name())];
        if let Some(email) = owner.email() {
            lines.push(format!("   Email: {}", email));
        }
        lines.push(format!("   Pets: {}", owner.pets().len()));
        if !owner.pets().is_empty() {
            lines.push("   Pet List:".to_string());
            for pet in owner.pets() {
                lines.push(format!(
                    "     - {} ({}): {}",
                    pet.name(),
                    pet.species(),
                    format::pounds_or(pet.latest_weight(), "No weight recorded")
                ));
            }
        }
        Ok(lines)
    }

    // ---- pets ----

    fn create_pet(&mut self, profile: PetProfile) -> Lines {
        let owner_id = self
            .tracker
            .current_owner()
            .map_err(|_| ConsoleError::OwnerRequired)?
            .id()
            .to_string();
        let pet = self.tracker.create_pet(&owner_id, profile)?;

        let mut lines = vec![
            format!("✅ Created pet: {}", pet.name()),
            format!(
                "   Species: {}, Sex: {}, Age: {} years",
                pet.species(),
                pet.sex(),
                pet.age_years()
            ),
        ];
        if let Some(pounds) = pet.latest_weight() {
            lines.push(format!("   Starting weight: {} lbs", pounds));
        }
        Ok(lines)
    }

    fn list_pets(&self) -> Lines {
        let owner = self.tracker.current_owner()?;
        if owner.pets().is_empty() {
            return Ok(vec!["📝 No pets created yet".to_string()]);
        }

        let current_id = self.tracker.current_pet().ok().map(|p| p.id().to_string());
        let mut lines = vec![String::new(), format!("🐾 Pets for {}:", owner.name())];
        for (index, pet) in owner.pets().iter().enumerate() {
            let current = if current_id.as_deref() == Some(pet.id()) { " (current)" } else { "" };
            lines.push(format!(
                "  {}. {}{}: {}",
                index + 1,
                pet.name(),
                current,
                format::pounds_or(pet.latest_weight(), "No weight recorded")
            ));
        }
        Ok(lines)
    }

    fn current_pet(&self) -> Lines {
        let pet = self.tracker.current_pet()?;
        Ok(vec![
            String::new(),
            format!("🐾 Current Pet: {}", pet.name()),
            format!("   Species: {}", pet.species()),
            format!("   Sex: {}", pet.sex()),
            format!("   Age: {} years", pet.age_years()),
            format!("   Latest weight: {}", format::pounds_or(pet.latest_weight(), "Not recorded")),
            format!("   Goal weight: {}", format::pounds_or(pet.goal_weight_lb(), "Not set")),
            format!(
                "   Daily calorie goal: {}",
                format::kcal_or(pet.daily_calorie_goal(), "Not set")
            ),
            format!("   Weight entries: {}", pet.weight_log().len()),
            format!("   Meal entries: {}", pet.meals().len()),
        ])
    }

    fn edit_pet(&mut self, update: PetProfileUpdate) -> Lines {
        let owner_id = self.tracker.current_owner()?.id().to_string();
        let pet_id = self.tracker.current_pet()?.id().to_string();
        let pet = self.tracker.update_pet(&owner_id, &pet_id, update)?;

        let mut lines = vec![
            "✅ Pet information updated".to_string(),
            format!(
                "   Name: {}, Species: {}, Sex: {}, Age: {} years",
                pet.name(),
                pet.species(),
                pet.sex(),
                pet.age_years()
            ),
        ];
        if let Some(photo_url) = pet.photo_url() {
            lines.push(format!("   Photo: {}", photo_url));
        }
        Ok(lines)
    }

    fn remove_pet(&mut self, name: &str) -> Lines {
        let owner = self.tracker.current_owner()?;
        let owner_id = owner.id().to_string();
        let pet_id = owner
            .find_pet_by_name(name)
            .map(|p| p.id().to_string())
            .ok_or_else(|| TrackerError::PetNotFound(name.to_string()))?;

        let pet = self.tracker.remove_pet(&owner_id, &pet_id)?;
        Ok(vec![format!("✅ Removed pet: {}", pet.name())])
    }

    // ---- weights ----

    fn add_weight(&mut self, pounds: f64, note: String) -> Lines {
        let note = Some(note).filter(|n| !n.is_empty());
        let entry = self.tracker.current_pet_mut()?.add_weight(
            pounds,
            WeightOptions {
                note,
                ..Default::default()
            },
        )?;

        let mut lines = vec![format!("✅ Added weight: {} lbs", entry.pounds())];
        if !entry.note().is_empty() {
            lines.push(format!("   Note: {}", entry.note()));
        }
        lines.push(format!("   Date: {}", format::local_day(entry.date())));
        Ok(lines)
    }

    fn weights(&self) -> Lines {
        let pet = self.tracker.current_pet()?;
        if pet.weight_log().is_empty() {
            return Ok(vec!["📝 No weight entries recorded".to_string()]);
        }

        let mut lines = vec![String::new(), format!("⚖️ Weight History for {}:", pet.name())];
        for (index, entry) in pet.weight_log().iter().enumerate() {
            lines.push(format!(
                "   {}. {} lbs - {}",
                index + 1,
                entry.pounds(),
                format::local_day(entry.date())
            ));
            if !entry.note().is_empty() {
                lines.push(format!("      Note: {}", entry.note()));
            }
        }
        Ok(lines)
    }

    fn weights_history(&self, day: Option<NaiveDate>) -> Lines {
        let pet = self.tracker.current_pet()?;
        let day = day.unwrap_or_else(today);
        let entries = pet.weights_on_day(day, &Local);
        if entries.is_empty() {
            return Ok(vec![format!(
                "📝 No weight entries recorded for {}",
                format::day(day)
            )]);
        }

        let mut lines = vec![String::new(), format!("⚖️ Weight Entries for {}:", format::day(day))];
        for (index, entry) in entries.iter().enumerate() {
            lines.push(format!(
                "   {}. {} lbs - {}",
                index + 1,
                entry.pounds(),
                format::local_time(entry.date())
            ));
            if !entry.note().is_empty() {
                lines.push(format!("      Note: {}", entry.note()));
            }
        }
        Ok(lines)
    }

    // ---- meals & foods ----

    /// Meals of one local day; `with_time` adds the time of each meal
    fn meals(&self, day: Option<NaiveDate>, with_time: bool) -> Lines {
        let pet = self.tracker.current_pet()?;
        let day = day.unwrap_or_else(today);
        let meals = pet.meals_on_day(day, &Local);
        if meals.is_empty() {
            let what = if with_time { "meal entries" } else { "meals" };
            return Ok(vec![format!("📝 No {} recorded for {}", what, format::day(day))]);
        }

        let title = if with_time { "Meal Entries" } else { "Meals" };
        let mut lines = vec![String::new(), format!("🍽️ {} for {}:", title, format::day(day))];
        for (index, meal) in meals.iter().enumerate() {
            let mut line =
                format!("   {}. {} - {} calories", index + 1, meal.name(), meal.calories());
            if with_time {
                line.push_str(&format!(" - {}", format::local_time(meal.date())));
            }
            lines.push(line);
        }
        lines.push(format!("   Total: {} calories", pet.calories_on_day(day, &Local)));
        Ok(lines)
    }

    fn foods(&self) -> Vec<String> {
        let mut lines = vec![String::new(), "🥣 Food Catalog:".to_string()];
        for listed in self.food_service.list_foods() {
            let custom = if listed.user_defined { " [custom]" } else { "" };
            lines.push(format!(
                "  {}: {} ({} cal/g){}",
                listed.food.id, listed.food.name, listed.food.calories_per_gram, custom
            ));
        }
        lines
    }

    /// Hazard check against the current pet's species, or dogs without a pet
    fn check_food(&self, query: &str) -> Vec<String> {
        let species = self
            .tracker
            .current_pet()
            .map(|pet| pet.species().to_string())
            .unwrap_or_else(|_| DEFAULT_SPECIES.to_string());

        match self.food_service.is_toxic_for(query, &species) {
            Some(hazard) => {
                let mut lines = vec![format!(
                    "⚠️ {} is toxic for {} (severity: {})",
                    query, species, hazard.severity
                )];
                if !hazard.symptoms.is_empty() {
                    lines.push(format!("   Symptoms: {}", hazard.symptoms.join(", ")));
                }
                if !hazard.dose_notes.is_empty() {
                    lines.push(format!("   Notes: {}", hazard.dose_notes));
                }
                lines
            }
            None => vec![format!("✅ {}: no known hazard for {}", query, species)],
        }
    }

    // ---- status & reports ----

    fn status(&self) -> Lines {
        let pet = self.tracker.current_pet()?;
        let calories = pet.calories_status_on(&Local::now());
        Ok(vec![
            String::new(),
            format!("📊 Status for {}:", pet.name()),
            format!(
                "   Weight Status: {}",
                format::weight_status(self.reports.goal_status(pet))
            ),
            format!(
                "   Calories Today: {} kcal ({})",
                calories.intake,
                format::calorie_status(calories.status)
            ),
        ])
    }

    fn calories(&self, day: Option<NaiveDate>) -> Lines {
        let pet = self.tracker.current_pet()?;
        let day = day.unwrap_or_else(today);
        let report = pet.calories_status_on_day(day, &Local);

        let mut lines = vec![
            String::new(),
            format!("🍽️ Calories for {}:", format::day(day)),
            format!("   Total: {} kcal", report.intake),
            format!("   Status: {}", format::calorie_status(report.status)),
        ];
        if let Some(goal) = pet.daily_calorie_goal() {
            lines.push(format!("   Goal: {} kcal", goal));
        }
        Ok(lines)
    }

    fn report(&self, pet_name: Option<&str>) -> Lines {
        let owner = self.tracker.current_owner()?;
        let reports = self
            .reports
            .owner_report(owner, pet_name, &Local::now())
            .ok_or_else(|| TrackerError::PetNotFound(pet_name.unwrap_or_default().to_string()))?;

        let mut lines = vec![
            String::new(),
            format!("📊 Comprehensive Report for {}:", owner.name()),
            "=".repeat(50),
        ];
        for report in reports {
            lines.push(String::new());
            lines.push(format!("🐾 {} ({}):", report.name, report.species));
            lines.push(format!("   Age: {} years, Sex: {}", report.age_years, report.sex));
            lines.push(format!(
                "   Latest Weight: {}",
                format::pounds_or(report.latest_weight, "Not recorded")
            ));
            lines.push(format!(
                "   Goal Weight: {}",
                format::pounds_or(report.goal_weight, "Not set")
            ));
            lines.push(format!(
                "   Daily Calorie Goal: {}",
                format::kcal_or(report.daily_calorie_goal, "Not set")
            ));
            lines.push(format!(
                "   Weight Status: {}",
                format::weight_status(report.goal_status)
            ));
            lines.push(format!(
                "   Calorie Status: {} ({} kcal today)",
                format::calorie_status(report.calorie_status.status),
                report.calorie_status.intake
            ));
            lines.push(format!("   Total Weight Entries: {}", report.weight_entries));
            lines.push(format!("   Total Meal Entries: {}", report.meal_entries));
            if let Some(change) = report.weight_change {
                lines.push(format!("   Weight Change: {}", format::weight_change(change)));
            }
        }
        Ok(lines)
    }

    // ---- persistence ----

    fn save(&self, key: &str) -> Vec<String> {
        let document = SessionDocument::from_tracker(&self.tracker);
        match self.sessions.save_session(key, &document) {
            Ok(()) => vec![format!("✅ Saved all data with key: {}", key)],
            Err(e) => {
                error!("Failed to save session {}: {:#}", key, e);
                vec![format!("❌ Failed to save data: {:#}", e)]
            }
        }
    }

    fn load(&mut self, key: &str) -> Vec<String> {
        match self.sessions.load_session(key) {
            Ok(Some(document)) => {
                document.restore_into(&mut self.tracker);
                vec![
                    format!("✅ Loaded data from key: {}", key),
                    format!("   Loaded {} owner(s)", self.tracker.owners().len()),
                ]
            }
            Ok(None) => vec![format!("❌ No data found with key: {}", key)],
            Err(e) => {
                warn!("Failed to load session {}: {:#}", key, e);
                vec!["❌ Failed to load data".to_string()]
            }
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn help() -> Vec<String> {
    [
        "",
        "📋 Available Commands:",
        "",
        "👤 Owner Management:",
        "  createowner <name> [email]              - Create a new owner",
        "  selectowner <name>                      - Select an owner",
        "  listowners                              - List all owners",
        "  currentowner                            - Show current owner info",
        "",
        "🐾 Pet Management:",
        "  createpet <name> [species] [sex] [age] [startWeight] - Create a new pet",
        "  listpets                                - List all pets for current owner",
        "  selectpet <name>                        - Select a pet",
        "  currentpet                              - Show current pet info",
        "  editpet <name> [species] [sex] [age] [photoUrl] - Edit the current pet",
        "  removepet <name>                        - Remove a pet",
        "",
        "⚖️ Weight Tracking:",
        "  addweight <pounds> [note]               - Add weight entry",
        "  weights                                 - Show weight history",
        "  weightshistory [date]                   - Show weight entries for a date",
        "  setgoal <weight>                        - Set goal weight",
        "",
        "🍽️ Meal Tracking:",
        "  addmeal <name> <calories>               - Add meal entry",
        "  addfood <foodId> <grams>                - Add a catalog food by weight",
        "  foods                                   - List the food catalog",
        "  checkfood <food...>                     - Check a food for hazards",
        "  meals [date]                            - Show meals for a day",
        "  mealshistory [date]                     - Show meal entries with times",
        "  setcaloriegoal <calories>               - Set daily calorie goal",
        "",
        "📊 Reports & Status:",
        "  status                                  - Show goal status",
        "  calories [date]                         - Show calories for a day",
        "  report [petname]                        - Generate comprehensive report",
        "",
        "💾 Data Management:",
        "  save [key]                              - Save all data under a key",
        "  load <key>                              - Load data saved under a key",
        "",
        "🔧 Utility:",
        "  clear                                   - Clear screen",
        "  help                                    - Show this help",
        "  exit/quit                               - Exit console",
        "",
        "Dates are written as YYYY-MM-DD.",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
