//! # REST API for the Calculator
//!
//! `POST /calculate` with `{ operation, a, b }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{CalculateRequest, CalculateResponse};
use tracing::{info, warn};

use super::{error_response, JsonBody};
use crate::domain::calculator;

pub async fn calculate(JsonBody(request): JsonBody<CalculateRequest>) -> Response {
    info!("POST /calculate - request: {:?}", request);

    match calculator::calculate(&request.operation, &request.a, request.b.as_ref()) {
        Ok(result) => (
            StatusCode::OK,
            Json(CalculateResponse {
                success: true,
                operation: request.operation,
                a: request.a,
                b: request.b,
                result,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Calculation failed: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}
