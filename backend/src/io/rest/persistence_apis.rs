//! # REST API for Saving and Loading
//!
//! The server keeps its owners in memory. `POST /api/save` writes them to the
//! owner document and `POST /api/load` replaces the in-memory state with it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::PersistenceResponse;
use tracing::{error, info};

use super::{error_response, lock, AppState};

pub async fn save(State(state): State<AppState>) -> Response {
    info!("POST /api/save");

    let tracker = lock(&state.tracker);
    match state.owner_repository.save_owners(tracker.owners()) {
        Ok(()) => {
            let owner_count = tracker.owners().len();
            let response = PersistenceResponse {
                success: true,
                message: format!("Saved {} owner(s)", owner_count),
                owner_count,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to save owners: {:#}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to save data: {:#}", e),
            )
        }
    }
}

/// Replace the in-memory owners with the stored ones. A missing or
/// unreadable document loads as an empty collection.
pub async fn load(State(state): State<AppState>) -> Response {
    info!("POST /api/load");

    let owners = state.owner_repository.load_owners();
    let owner_count = owners.len();
    lock(&state.tracker).replace_owners(owners);

    let response = PersistenceResponse {
        success: true,
        message: format!("Loaded {} owner(s)", owner_count),
        owner_count,
    };
    (StatusCode::OK, Json(response)).into_response()
}
