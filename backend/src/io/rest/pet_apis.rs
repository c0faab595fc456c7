//! # REST API for Pet Management
//!
//! Pets are addressed as `/api/owners/:owner_id/pets/:pet_id`. Besides the
//! profile CRUD endpoints this module records weights and meals, sets goals
//! and reports the goal and calorie status for a day.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Local;
use serde::Deserialize;
use shared::{
    AddMealRequest, AddMealResponse, AddWeightRequest, AddWeightResponse, CreatePetRequest,
    LogFoodRequest, PetResponse, PetStatusResponse, SetGoalsRequest, UpdatePetRequest,
};
use tracing::{info, warn};

use super::mappers::PetMapper;
use super::{
    error_response, food_error_response, lock, tracker_error_response, AppState, JsonBody,
};
use crate::domain::models::entries::WeightOptions;
use crate::domain::models::pet::Pet;
use crate::domain::TrackerError;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// Calendar day (YYYY-MM-DD), today when absent
    pub date: Option<String>,
}

fn pet_response(state: &AppState, pet: &Pet, message: String) -> PetResponse {
    PetResponse {
        pet: PetMapper::to_detail(pet, &state.report_service, &Local::now()),
        success_message: message,
    }
}

fn bad_request(error: impl std::fmt::Display) -> Response {
    error_response(StatusCode::BAD_REQUEST, error.to_string())
}

/// Create a pet for an owner
pub async fn create_pet(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    JsonBody(request): JsonBody<CreatePetRequest>,
) -> Response {
    info!("POST /api/owners/{}/pets - request: {:?}", owner_id, request);

    let mut tracker = lock(&state.tracker);
    match tracker.create_pet(&owner_id, PetMapper::to_profile(request)) {
        Ok(pet) => {
            let message = format!("Pet '{}' created successfully", pet.name());
            (StatusCode::CREATED, Json(pet_response(&state, pet, message))).into_response()
        }
        Err(e) => {
            warn!("Failed to create pet: {}", e);
            tracker_error_response(&e)
        }
    }
}

/// Get a pet with its full logs and current statuses
pub async fn get_pet(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
) -> Response {
    info!("GET /api/owners/{}/pets/{}", owner_id, pet_id);

    let tracker = lock(&state.tracker);
    match tracker.pet(&owner_id, &pet_id) {
        Ok(pet) => {
            let detail = PetMapper::to_detail(pet, &state.report_service, &Local::now());
            (StatusCode::OK, Json(detail)).into_response()
        }
        Err(e) => tracker_error_response(&e),
    }
}

/// Update a pet's profile
pub async fn update_pet(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
    JsonBody(request): JsonBody<UpdatePetRequest>,
) -> Response {
    info!("PUT /api/owners/{}/pets/{} - request: {:?}", owner_id, pet_id, request);

    let mut tracker = lock(&state.tracker);
    match tracker.update_pet(&owner_id, &pet_id, PetMapper::to_profile_update(request)) {
        Ok(pet) => {
            let message = format!("Pet '{}' updated successfully", pet.name());
            (StatusCode::OK, Json(pet_response(&state, pet, message))).into_response()
        }
        Err(e) => {
            warn!("Failed to update pet: {}", e);
            tracker_error_response(&e)
        }
    }
}

/// Delete a pet
pub async fn delete_pet(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
) -> Response {
    info!("DELETE /api/owners/{}/pets/{}", owner_id, pet_id);

    let mut tracker = lock(&state.tracker);
    match tracker.remove_pet(&owner_id, &pet_id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            warn!("Failed to delete pet: {}", e);
            tracker_error_response(&e)
        }
    }
}

/// Record a weight
pub async fn add_weight(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
    JsonBody(request): JsonBody<AddWeightRequest>,
) -> Response {
    info!("POST /api/owners/{}/pets/{}/weights - request: {:?}", owner_id, pet_id, request);

    let date = match PetMapper::parse_timestamp(request.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return bad_request(e),
    };
    let options = WeightOptions {
        date,
        note: request.note,
        image_url: request.image_url,
    };

    let mut tracker = lock(&state.tracker);
    let result = tracker.pet_mut(&owner_id, &pet_id).and_then(|pet| {
        let entry = pet.add_weight(request.pounds, options)?;
        Ok((entry, state.report_service.goal_status(pet)))
    });
    match result {
        Ok((entry, goal_status)) => {
            let response = AddWeightResponse {
                success_message: format!("Added weight: {} lbs", entry.pounds()),
                entry: PetMapper::to_weight_dto(&entry),
                goal_status,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Failed to add weight: {}", e);
            tracker_error_response(&e)
        }
    }
}

/// Record a meal by name and calories
pub async fn add_meal(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
    JsonBody(request): JsonBody<AddMealRequest>,
) -> Response {
    info!("POST /api/owners/{}/pets/{}/meals - request: {:?}", owner_id, pet_id, request);

    let date = match PetMapper::parse_timestamp(request.date.as_deref()) {
        Ok(date) => date,
        Err(e) => return bad_request(e),
    };

    let mut tracker = lock(&state.tracker);
    let result = tracker.pet_mut(&owner_id, &pet_id).and_then(|pet| {
        let meal = pet.add_meal(request.name, request.calories, date)?;
        let status = pet.calories_status_on(&meal.date().with_timezone(&Local));
        Ok((meal, status))
    });
    match result {
        Ok((meal, calorie_status)) => {
            let response = AddMealResponse {
                success_message: format!(
                    "Added meal: {} ({} calories)",
                    meal.name(),
                    meal.calories()
                ),
                entry: PetMapper::to_meal_dto(&meal),
                calorie_status,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Failed to add meal: {}", e);
            tracker_error_response(&e)
        }
    }
}

/// Record a meal from the food catalog by weight
pub async fn log_food(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
    JsonBody(request): JsonBody<LogFoodRequest>,
) -> Response {
    info!("POST /api/owners/{}/pets/{}/foods - request: {:?}", owner_id, pet_id, request);

    let food_service = lock(&state.food_service);
    let mut tracker = lock(&state.tracker);
    let pet = match tracker.pet_mut(&owner_id, &pet_id) {
        Ok(pet) => pet,
        Err(e) => return tracker_error_response(&e),
    };

    match food_service.log_food(pet, &request.food_id, request.grams, None) {
        Ok(meal) => {
            let calorie_status = pet.calories_status_on(&Local::now());
            let response = AddMealResponse {
                success_message: format!(
                    "Added meal: {} ({} calories)",
                    meal.name(),
                    meal.calories()
                ),
                entry: PetMapper::to_meal_dto(&meal),
                calorie_status,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Failed to log food: {}", e);
            food_error_response(&e)
        }
    }
}

/// Set or clear the weight and calorie goals. Either every change is applied
/// or none.
pub async fn set_goals(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
    JsonBody(request): JsonBody<SetGoalsRequest>,
) -> Response {
    info!("PUT /api/owners/{}/pets/{}/goals - request: {:?}", owner_id, pet_id, request);

    let mut tracker = lock(&state.tracker);
    let result = tracker.pet_mut(&owner_id, &pet_id).and_then(|pet| {
        let mut updated = pet.clone();
        if request.clear_goal_weight {
            updated.clear_goal_weight();
        }
        if request.clear_daily_calorie_goal {
            updated.clear_daily_calorie_goal();
        }
        if let Some(pounds) = request.goal_weight_lb {
            updated.set_goal_weight(pounds)?;
        }
        if let Some(kcal) = request.daily_calorie_goal {
            updated.set_daily_calorie_goal(kcal)?;
        }
        *pet = updated;
        Ok::<_, TrackerError>(&*pet)
    });
    match result {
        Ok(pet) => {
            let message = format!("Goals updated for '{}'", pet.name());
            (StatusCode::OK, Json(pet_response(&state, pet, message))).into_response()
        }
        Err(e) => {
            warn!("Failed to set goals: {}", e);
            tracker_error_response(&e)
        }
    }
}

/// Goal status and the calorie status of one calendar day (local time)
pub async fn get_status(
    State(state): State<AppState>,
    Path((owner_id, pet_id)): Path<(String, String)>,
    Query(query): Query<StatusQuery>,
) -> Response {
    info!("GET /api/owners/{}/pets/{}/status - query: {:?}", owner_id, pet_id, query);

    let day = match query.date.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(date) => match PetMapper::parse_day(date) {
            Ok(day) => day,
            Err(e) => return bad_request(e),
        },
        None => Local::now().date_naive(),
    };

    let tracker = lock(&state.tracker);
    match tracker.pet(&owner_id, &pet_id) {
        Ok(pet) => {
            let response = PetStatusResponse {
                pet_id: pet.id().to_string(),
                date: day.format("%Y-%m-%d").to_string(),
                latest_weight_lb: pet.latest_weight(),
                goal_weight_lb: pet.goal_weight_lb(),
                goal_status: state.report_service.goal_status(pet),
                daily_calorie_goal: pet.daily_calorie_goal(),
                calories: pet.calories_status_on_day(day, &Local),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => tracker_error_response(&e),
    }
}
