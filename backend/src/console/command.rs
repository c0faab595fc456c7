//! Parsing of console input lines into [`Command`]s.
//!
//! Arguments are separated by whitespace. Numbers must parse as plain decimal
//! numbers and dates as `YYYY-MM-DD`; anything else is a [`CommandError`]
//! and never reaches the domain.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown command: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    CreateOwner {
        name: String,
        email: Option<String>,
    },
    SelectOwner(String),
    ListOwners,
    CurrentOwner,
    CreatePet {
        name: String,
        species: Option<String>,
        sex: Option<String>,
        age_years: Option<f64>,
        /// `None` when omitted or given as 0
        start_weight_lb: Option<f64>,
    },
    ListPets,
    SelectPet(String),
    CurrentPet,
    /// Edit the current pet; `name` is its (possibly new) name
    EditPet {
        name: String,
        species: Option<String>,
        sex: Option<String>,
        age_years: Option<f64>,
        photo_url: Option<String>,
    },
    RemovePet(String),
    AddWeight {
        pounds: f64,
        note: String,
    },
    Weights,
    WeightsHistory(Option<NaiveDate>),
    SetGoal(f64),
    AddMeal {
        name: String,
        calories: f64,
    },
    AddFood {
        food_id: String,
        grams: f64,
    },
    Foods,
    CheckFood(String),
    Meals(Option<NaiveDate>),
    MealsHistory(Option<NaiveDate>),
    SetCalorieGoal(f64),
    Status,
    Calories(Option<NaiveDate>),
    Report(Option<String>),
    Save(Option<String>),
    Load(String),
    Clear,
    Exit,
}

pub const CREATE_OWNER_USAGE: &str = "createowner <name> [email]";
pub const SELECT_OWNER_USAGE: &str = "selectowner <name>";
pub const CREATE_PET_USAGE: &str = "createpet <name> [species] [sex] [age] [startWeight]";
pub const SELECT_PET_USAGE: &str = "selectpet <name>";
pub const EDIT_PET_USAGE: &str = "editpet <name> [species] [sex] [age] [photoUrl]";
pub const REMOVE_PET_USAGE: &str = "removepet <name>";
pub const ADD_WEIGHT_USAGE: &str = "addweight <pounds> [note]";
pub const SET_GOAL_USAGE: &str = "setgoal <weight>";
pub const ADD_MEAL_USAGE: &str = "addmeal <name> <calories>";
pub const ADD_FOOD_USAGE: &str = "addfood <foodId> <grams>";
pub const CHECK_FOOD_USAGE: &str = "checkfood <food...>";
pub const SET_CALORIE_GOAL_USAGE: &str = "setcaloriegoal <calories>";
pub const LOAD_USAGE: &str = "load <key>";

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_lowercase().as_str() {
            "help" => Command::Help,
            "createowner" => Command::CreateOwner {
                name: required(&args, 0, CREATE_OWNER_USAGE)?,
                email: optional(&args, 1),
            },
            "selectowner" => Command::SelectOwner(required(&args, 0, SELECT_OWNER_USAGE)?),
            "listowners" => Command::ListOwners,
            "currentowner" => Command::CurrentOwner,
            "createpet" => Command::CreatePet {
                name: required(&args, 0, CREATE_PET_USAGE)?,
                species: optional(&args, 1),
                sex: optional(&args, 2),
                age_years: optional_number(&args, 3)?,
                start_weight_lb: optional_number(&args, 4)?.filter(|w| *w != 0.0),
            },
            "listpets" => Command::ListPets,
            "selectpet" => Command::SelectPet(required(&args, 0, SELECT_PET_USAGE)?),
            "currentpet" => Command::CurrentPet,
            "editpet" => Command::EditPet {
                name: required(&args, 0, EDIT_PET_USAGE)?,
                species: optional(&args, 1),
                sex: optional(&args, 2),
                age_years: optional_number(&args, 3)?,
                photo_url: optional(&args, 4),
            },
            "removepet" => Command::RemovePet(required(&args, 0, REMOVE_PET_USAGE)?),
            "addweight" => Command::AddWeight {
                pounds: number(&required(&args, 0, ADD_WEIGHT_USAGE)?)?,
                note: args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default(),
            },
            "weights" => Command::Weights,
            "weightshistory" => Command::WeightsHistory(optional_date(&args)?),
            "setgoal" => Command::SetGoal(number(&required(&args, 0, SET_GOAL_USAGE)?)?),
            "addmeal" => {
                // The last argument is the calorie count, everything before it the name
                let Some((calories, name)) = args.split_last().filter(|(_, name)| !name.is_empty())
                else {
                    return Err(CommandError::Usage(ADD_MEAL_USAGE));
                };
                Command::AddMeal {
                    name: name.join(" "),
                    calories: number(calories)?,
                }
            }
            "addfood" => Command::AddFood {
                food_id: required(&args, 0, ADD_FOOD_USAGE)?,
                grams: number(&required(&args, 1, ADD_FOOD_USAGE)?)?,
            },
            "foods" => Command::Foods,
            "checkfood" => {
                if args.is_empty() {
                    return Err(CommandError::Usage(CHECK_FOOD_USAGE));
                }
                Command::CheckFood(args.join(" "))
            }
            "meals" => Command::Meals(optional_date(&args)?),
            "mealshistory" => Command::MealsHistory(optional_date(&args)?),
            "setcaloriegoal" => {
                Command::SetCalorieGoal(number(&required(&args, 0, SET_CALORIE_GOAL_USAGE)?)?)
            }
            "status" => Command::Status,
            "calories" => Command::Calories(optional_date(&args)?),
            "report" => Command::Report(optional(&args, 0)),
            "save" => Command::Save(optional(&args, 0)),
            "load" => Command::Load(required(&args, 0, LOAD_USAGE)?),
            "clear" => Command::Clear,
            "exit" | "quit" => Command::Exit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn required(args: &[&str], index: usize, usage: &'static str) -> Result<String, CommandError> {
    optional(args, index).ok_or(CommandError::Usage(usage))
}

fn optional(args: &[&str], index: usize) -> Option<String> {
    args.get(index).map(|arg| arg.to_string())
}

fn number(value: &str) -> Result<f64, CommandError> {
    value
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

fn optional_number(args: &[&str], index: usize) -> Result<Option<f64>, CommandError> {
    args.get(index).map(|arg| number(arg)).transpose()
}

fn optional_date(args: &[&str]) -> Result<Option<NaiveDate>, CommandError> {
    args.first()
        .map(|arg| {
            NaiveDate::parse_from_str(arg, "%Y-%m-%d")
                .map_err(|_| CommandError::InvalidDate(arg.to_string()))
        })
        .transpose()
}
