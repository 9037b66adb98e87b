use super::valid_coordinates;
use crate::api::{
    error::{ApiError, ErrorBody},
    state::AppState,
};
use attendance_core::{
    rules,
    types::{LocationCheckRequest, LocationCheckResponse},
};
use axum::{Json, extract::Extension};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/location/check",
    request_body = LocationCheckRequest,
    responses (
        (
            status = 200,
            description = "Whether the position is inside the allowed area",
            body = LocationCheckResponse
        ),
        (status = 422, description = "Coordinates out of range", body = ErrorBody),
    ),
    tag = "location",
)]
/// Decide whether a device position may use the application.
#[instrument(skip(state, request))]
pub async fn check_location(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<LocationCheckRequest>,
) -> Result<Json<LocationCheckResponse>, ApiError> {
    let coords = valid_coordinates(request.lat, request.lng)?;

    state.simulate_latency().await;

    let response = rules::check_location(coords);
    debug!(allowed = response.allowed, "location checked");

    Ok(Json(response))
}
