use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight goal status of a pet, derived from its latest weight and goal weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    /// No goal weight has been set
    NoGoal,
    /// A goal is set but no weight has been recorded
    NoWeight,
    /// Latest weight is within tolerance of the goal
    Met,
    /// Latest weight is above the goal beyond tolerance
    Above,
    /// Latest weight is below the goal beyond tolerance
    Below,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NoGoal => "NO_GOAL",
            GoalStatus::NoWeight => "NO_WEIGHT",
            GoalStatus::Met => "MET",
            GoalStatus::Above => "ABOVE",
            GoalStatus::Below => "BELOW",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily calorie status of a pet for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalorieStatus {
    NoGoal,
    Under,
    Met,
    Over,
}

impl CalorieStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalorieStatus::NoGoal => "NO_GOAL",
            CalorieStatus::Under => "UNDER",
            CalorieStatus::Met => "MET",
            CalorieStatus::Over => "OVER",
        }
    }
}

impl fmt::Display for CalorieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calorie status together with the summed intake it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieStatusReport {
    pub status: CalorieStatus,
    pub intake: f64,
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Calculator operand: the web form sends either JSON numbers or numeric strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberInput::Number(n) => write!(f, "{}", n),
            NumberInput::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub operation: String,
    pub a: NumberInput,
    /// Omitted for unary operations such as `sqrt`
    #[serde(default)]
    pub b: Option<NumberInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub success: bool,
    pub operation: String,
    pub a: NumberInput,
    pub b: Option<NumberInput>,
    pub result: f64,
}

/// Error body shared by the calculator endpoint and the tracker API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Owners
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOwnerRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub pet_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerListResponse {
    pub owners: Vec<OwnerSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerDetail {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub pets: Vec<PetSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub owner: OwnerDetail,
    pub success_message: String,
}

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub age_years: Option<f64>,
    /// Seed weight, recorded as the oldest entry of the weight log
    #[serde(default)]
    pub start_weight_lb: Option<f64>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub age_years: Option<f64>,
    /// An empty string clears the photo
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetSummary {
    pub id: String,
    pub name: String,
    pub species: String,
    pub sex: String,
    pub age_years: f64,
    pub latest_weight_lb: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntryDto {
    pub id: String,
    pub pounds: f64,
    /// RFC 3339 timestamp
    pub date: String,
    pub note: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntryDto {
    pub id: String,
    pub name: String,
    pub calories: f64,
    /// RFC 3339 timestamp
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDetail {
    pub id: String,
    pub name: String,
    pub species: String,
    pub sex: String,
    pub age_years: f64,
    pub photo_url: Option<String>,
    pub goal_weight_lb: Option<f64>,
    pub daily_calorie_goal: Option<f64>,
    pub latest_weight_lb: Option<f64>,
    pub weight_log: Vec<WeightEntryDto>,
    pub meals: Vec<MealEntryDto>,
    pub goal_status: GoalStatus,
    /// Calorie status for the current day
    pub calorie_status: CalorieStatusReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetResponse {
    pub pet: PetDetail,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddWeightRequest {
    pub pounds: f64,
    /// RFC 3339 timestamp, defaults to now
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddWeightResponse {
    pub entry: WeightEntryDto,
    pub goal_status: GoalStatus,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMealRequest {
    pub name: String,
    pub calories: f64,
    /// RFC 3339 timestamp, defaults to now
    #[serde(default)]
    pub date: Option<String>,
}

/// Record a meal from the food catalog by weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFoodRequest {
    pub food_id: String,
    pub grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMealResponse {
    pub entry: MealEntryDto,
    pub calorie_status: CalorieStatusReport,
    pub success_message: String,
}

/// Goals to set; absent fields are left unchanged. A `clear_*` flag removes
/// the goal before any new value is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetGoalsRequest {
    #[serde(default)]
    pub goal_weight_lb: Option<f64>,
    #[serde(default)]
    pub daily_calorie_goal: Option<f64>,
    #[serde(default)]
    pub clear_goal_weight: bool,
    #[serde(default)]
    pub clear_daily_calorie_goal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetStatusResponse {
    pub pet_id: String,
    /// Calendar day the calorie status refers to (YYYY-MM-DD)
    pub date: String,
    pub latest_weight_lb: Option<f64>,
    pub goal_weight_lb: Option<f64>,
    pub goal_status: GoalStatus,
    pub daily_calorie_goal: Option<f64>,
    pub calories: CalorieStatusReport,
}

// ---------------------------------------------------------------------------
// Food catalog and hazards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDto {
    pub id: String,
    pub name: String,
    pub calories_per_gram: f64,
    pub food_type: String,
    pub description: String,
    /// True for entries added by the user rather than shipped with the catalog
    pub user_defined: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodListResponse {
    pub foods: Vec<FoodDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFoodRequest {
    pub name: String,
    pub calories_per_gram: f64,
    #[serde(default)]
    pub food_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardDto {
    pub names: Vec<String>,
    pub species: Vec<String>,
    pub severity: String,
    pub toxins: Vec<String>,
    pub symptoms: Vec<String>,
    pub dose_notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardCheckResponse {
    pub query: String,
    pub species: String,
    pub toxic: bool,
    pub hazard: Option<HazardDto>,
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceResponse {
    pub success: bool,
    pub message: String,
    pub owner_count: usize,
}
