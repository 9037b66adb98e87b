use super::required_email;
use crate::api::{
    error::{ApiError, ErrorBody},
    state::AppState,
};
use attendance_core::types::{UserRoleRequest, UserRoleResponse};
use axum::{Json, extract::Extension};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/users/role",
    request_body = UserRoleRequest,
    responses (
        (status = 200, description = "Application role for the email", body = UserRoleResponse),
        (status = 400, description = "Missing email", body = ErrorBody),
    ),
    tag = "users",
)]
/// Look up whether an email belongs to a teacher or a student.
#[instrument(skip(state, request))]
pub async fn check_user_role(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<UserRoleRequest>,
) -> Result<Json<UserRoleResponse>, ApiError> {
    let email = required_email(&request.email, "email")?;

    state.simulate_latency().await;

    let role = state.rules().classify(&email);
    debug!(role = role.as_str(), "role resolved");

    Ok(Json(UserRoleResponse { role, email }))
}
