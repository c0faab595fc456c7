//! # REST API Interface Layer
//!
//! HTTP endpoints for the tracker and the calculator. This layer only
//! translates: it parses request DTOs, calls the domain while holding the
//! state lock for a single synchronous operation, and maps domain errors to
//! status codes:
//!
//! - validation errors → 400
//! - unknown owners, pets and foods → 404
//! - duplicate owner or pet names → 409
//! - storage failures → 500
//!
//! Error bodies are `{ "success": false, "error": "…" }`. Request bodies that
//! do not deserialize are validation errors too.

pub mod calculator_apis;
pub mod food_apis;
pub mod mappers;
pub mod owner_apis;
pub mod persistence_apis;
pub mod pet_apis;

use anyhow::Result;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use shared::ErrorResponse;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::models::food::{FoodCatalog, HazardCatalog};
use crate::domain::{FoodError, FoodService, ReportService, Tracker, TrackerError};
use crate::storage::json::{
    load_food_catalog, load_hazard_catalog, FileKeyValueStore, OwnerRepository, UserFoodRepository,
};
use crate::storage::KeyValueStore;

/// Shared state of every handler. Lock order: food service, then tracker.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
    pub food_service: Arc<Mutex<FoodService>>,
    pub owner_repository: OwnerRepository,
    pub report_service: ReportService,
}

impl AppState {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        catalog: FoodCatalog,
        hazards: HazardCatalog,
        goal_tolerance_lb: f64,
    ) -> Self {
        let food_service =
            FoodService::new(catalog, hazards, UserFoodRepository::new(store.clone()));
        Self {
            tracker: Arc::new(Mutex::new(Tracker::new())),
            food_service: Arc::new(Mutex::new(food_service)),
            owner_repository: OwnerRepository::new(store),
            report_service: ReportService::new(goal_tolerance_lb),
        }
    }
}

/// Build the application state from the configuration
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up data directory {:?}", config.data_directory);
    let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.data_directory)?);

    info!("Loading food and hazard catalogs");
    let catalog = load_food_catalog(config.food_catalog_path.as_deref())?;
    let hazards = load_hazard_catalog(config.hazard_catalog_path.as_deref())?;

    info!("Setting up application state");
    Ok(AppState::new(store, catalog, hazards, config.weight_tolerance_lb))
}

/// Build the router. The static directory, when given, serves the web UI for
/// every path the API does not handle.
pub fn create_router(state: AppState, static_directory: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/owners", get(owner_apis::list_owners).post(owner_apis::create_owner))
        .route("/owners/:owner_id", get(owner_apis::get_owner))
        .route("/owners/:owner_id/pets", post(pet_apis::create_pet))
        .route(
            "/owners/:owner_id/pets/:pet_id",
            get(pet_apis::get_pet)
                .put(pet_apis::update_pet)
                .delete(pet_apis::delete_pet),
        )
        .route("/owners/:owner_id/pets/:pet_id/weights", post(pet_apis::add_weight))
        .route("/owners/:owner_id/pets/:pet_id/meals", post(pet_apis::add_meal))
        .route("/owners/:owner_id/pets/:pet_id/foods", post(pet_apis::log_food))
        .route("/owners/:owner_id/pets/:pet_id/goals", put(pet_apis::set_goals))
        .route("/owners/:owner_id/pets/:pet_id/status", get(pet_apis::get_status))
        .route("/foods", get(food_apis::list_foods).post(food_apis::add_food))
        .route("/hazards/check", get(food_apis::check_hazard))
        .route("/save", post(persistence_apis::save))
        .route("/load", post(persistence_apis::load));

    let mut router = Router::new()
        .route("/calculate", post(calculator_apis::calculate))
        .nest("/api", api_routes);
    if let Some(directory) = static_directory {
        router = router.fallback_service(ServeDir::new(directory));
    }

    router.layer(cors).with_state(state)
}

/// Lock shared state. A poisoned lock still guards consistent data because
/// every domain operation validates before mutating.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// JSON request body. Rejections answer 400 with the usual error body
/// instead of axum's plain-text 4xx.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                Err(error_response(StatusCode::BAD_REQUEST, rejection.body_text()))
            }
        }
    }
}

pub(crate) fn tracker_error_response(error: &TrackerError) -> Response {
    let status = if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else if error.is_conflict() {
        StatusCode::CONFLICT
    } else {
        StatusCode::BAD_REQUEST
    };
    error_response(status, error.to_string())
}

pub(crate) fn food_error_response(error: &FoodError) -> Response {
    let status = match error {
        FoodError::UnknownFood(_) => StatusCode::NOT_FOUND,
        FoodError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    error_response(status, format!("{:#}", error))
}
