//! # REST API for Owner Management
//!
//! Endpoints for creating, listing and retrieving owners.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{CreateOwnerRequest, OwnerResponse};
use tracing::{info, warn};

use super::mappers::OwnerMapper;
use super::{error_response, lock, tracker_error_response, AppState, JsonBody};

/// Create a new owner
pub async fn create_owner(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateOwnerRequest>,
) -> Response {
    info!("POST /api/owners - request: {:?}", request);

    let mut tracker = lock(&state.tracker);
    match tracker.create_owner(&request.name, request.email) {
        Ok(owner) => {
            let response = OwnerResponse {
                owner: OwnerMapper::to_detail(owner),
                success_message: format!("Owner '{}' created successfully", owner.name()),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Failed to create owner: {}", e);
            tracker_error_response(&e)
        }
    }
}

/// List all owners
pub async fn list_owners(State(state): State<AppState>) -> Response {
    info!("GET /api/owners");

    let tracker = lock(&state.tracker);
    (StatusCode::OK, Json(OwnerMapper::to_list_dto(tracker.owners()))).into_response()
}

/// Get an owner with a summary of each pet
pub async fn get_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Response {
    info!("GET /api/owners/{}", owner_id);

    let tracker = lock(&state.tracker);
    match tracker.owner(&owner_id) {
        Some(owner) => (StatusCode::OK, Json(OwnerMapper::to_detail(owner))).into_response(),
        None => {
            warn!("Owner not found: {}", owner_id);
            error_response(StatusCode::NOT_FOUND, format!("Owner \"{}\" not found", owner_id))
        }
    }
}
