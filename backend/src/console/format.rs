//! Text rendering for console output.

use chrono::{DateTime, Local, NaiveDate, Utc};
use shared::{CalorieStatus, GoalStatus};

pub fn weight_status(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::NoGoal => "No goal set",
        GoalStatus::NoWeight => "No weight recorded",
        GoalStatus::Met => "✅ Goal met!",
        GoalStatus::Above => "⚠️ Above goal",
        GoalStatus::Below => "📈 Below goal",
    }
}

pub fn calorie_status(status: CalorieStatus) -> &'static str {
    match status {
        CalorieStatus::NoGoal => "No goal set",
        CalorieStatus::Under => "📉 Under goal",
        CalorieStatus::Met => "✅ Goal met!",
        CalorieStatus::Over => "⚠️ Over goal",
    }
}

/// `"32 lbs"`, or `missing` when there is no value
pub fn pounds_or(value: Option<f64>, missing: &str) -> String {
    value.map_or_else(|| missing.to_string(), |lb| format!("{} lbs", lb))
}

pub fn kcal_or(value: Option<f64>, missing: &str) -> String {
    value.map_or_else(|| missing.to_string(), |kcal| format!("{} kcal", kcal))
}

/// Signed change with one decimal, e.g. `+1.5 lbs` or `-3.7 lbs`
pub fn weight_change(change: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{}{:.1} lbs", sign, change)
}

pub fn day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn local_day(timestamp: DateTime<Utc>) -> String {
    day(timestamp.with_timezone(&Local).date_naive())
}

pub fn local_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

pub fn pet_count(count: usize) -> String {
    format!("{} pet{}", count, if count == 1 { "" } else { "s" })
}
