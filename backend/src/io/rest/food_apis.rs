//! # REST API for the Food Catalog and Hazard Checks

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use shared::{AddFoodRequest, FoodDto};
use tracing::{info, warn};

use super::mappers::FoodMapper;
use super::{food_error_response, lock, AppState, JsonBody};
use crate::domain::models::pet::DEFAULT_SPECIES;
use crate::domain::ListedFood;

#[derive(Debug, Deserialize)]
pub struct HazardQuery {
    pub query: String,
    /// Defaults to dog
    pub species: Option<String>,
}

/// List the builtin catalog followed by user-defined foods
pub async fn list_foods(State(state): State<AppState>) -> Response {
    info!("GET /api/foods");

    let food_service = lock(&state.food_service);
    (StatusCode::OK, Json(FoodMapper::to_list_dto(food_service.list_foods()))).into_response()
}

/// Add or replace a user-defined food
pub async fn add_food(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddFoodRequest>,
) -> Response {
    info!("POST /api/foods - request: {:?}", request);

    let mut food_service = lock(&state.food_service);
    match food_service.add_user_food(
        &request.name,
        request.calories_per_gram,
        request.food_type,
        request.description,
    ) {
        Ok(food) => {
            let dto: FoodDto = FoodMapper::to_dto(ListedFood {
                food,
                user_defined: true,
            });
            (StatusCode::CREATED, Json(dto)).into_response()
        }
        Err(e) => {
            warn!("Failed to add food: {}", e);
            food_error_response(&e)
        }
    }
}

/// Check whether a food is a known hazard for a species
pub async fn check_hazard(
    State(state): State<AppState>,
    Query(query): Query<HazardQuery>,
) -> Response {
    info!("GET /api/hazards/check - query: {:?}", query);

    let species = query
        .species
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SPECIES);

    let food_service = lock(&state.food_service);
    let hazard = food_service.is_toxic_for(&query.query, species);
    (
        StatusCode::OK,
        Json(FoodMapper::to_check_dto(&query.query, species, hazard)),
    )
        .into_response()
}
