use super::{required_email, valid_coordinates};
use crate::api::{
    error::{ApiError, ErrorBody},
    state::AppState,
};
use attendance_core::{
    Clock, Role,
    clock::SystemClock,
    rules,
    types::{AttendanceResponse, MarkAttendanceRequest, SendAttendanceRequest},
};
use axum::{Json, extract::Extension};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const TEACHERS_ONLY: &str = "Only teachers can send attendance";

#[utoipa::path(
    post,
    path = "/api/attendance/mark",
    request_body = MarkAttendanceRequest,
    responses (
        (status = 200, description = "Student recorded as present", body = AttendanceResponse),
        (status = 400, description = "Missing student email", body = ErrorBody),
        (status = 422, description = "Coordinates out of range", body = ErrorBody),
    ),
    tag = "attendance",
)]
/// Record a student as present at a position.
#[instrument(skip(state, request))]
pub async fn mark_attendance(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<MarkAttendanceRequest>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let email = required_email(&request.student_email, "studentEmail")?;
    let position = valid_coordinates(request.lat, request.lng)?;

    state.simulate_latency().await;

    let fresh = state
        .ledger()
        .mark(&email, position, SystemClock.now_ms())
        .await;
    info!(fresh, "attendance marked");

    Ok(Json(AttendanceResponse {
        success: true,
        message: Some(rules::ATTENDANCE_MARKED.to_string()),
    }))
}

#[utoipa::path(
    post,
    path = "/api/attendance/send",
    request_body = SendAttendanceRequest,
    responses (
        (status = 200, description = "Recorded attendance delivered", body = AttendanceResponse),
        (status = 400, description = "Missing teacher email", body = ErrorBody),
        (status = 403, description = "Email is not a teacher's", body = ErrorBody),
    ),
    tag = "attendance",
)]
/// Deliver every recorded mark on behalf of a teacher and clear the ledger.
#[instrument(skip(state, request))]
pub async fn send_attendance(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<SendAttendanceRequest>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let email = required_email(&request.teacher_email, "teacherEmail")?;
    if state.rules().classify(&email) != Role::Teacher {
        warn!(email = %email, "attendance send refused for non-teacher");
        return Err(ApiError::forbidden(TEACHERS_ONLY));
    }

    state.simulate_latency().await;

    let delivered = state.ledger().drain().await;
    info!(
        teacher = %email,
        delivered = delivered.len(),
        "attendance delivered"
    );

    Ok(Json(AttendanceResponse {
        success: true,
        message: Some(rules::attendance_sent_message(&email)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn mark_request(email: &str, lat: f64, lng: f64) -> Json<MarkAttendanceRequest> {
        Json(MarkAttendanceRequest {
            student_email: email.to_string(),
            lat,
            lng,
        })
    }

    #[tokio::test]
    async fn mark_records_student() {
        let state = Arc::new(AppState::default());
        let response = mark_attendance(
            Extension(state.clone()),
            mark_request("ana@gmail.com", 12.9, 77.6),
        )
        .await;

        let Ok(Json(body)) = response else {
            panic!("expected a mark");
        };
        assert!(body.success);
        assert_eq!(body.message.as_deref(), Some(rules::ATTENDANCE_MARKED));
        assert_eq!(state.ledger().len().await, 1);
    }

    #[tokio::test]
    async fn mark_rejects_blank_email_and_bad_position() {
        let state = Arc::new(AppState::default());

        let err = mark_attendance(Extension(state.clone()), mark_request(" ", 12.9, 77.6))
            .await
            .err();
        assert_eq!(
            err.as_ref().map(ApiError::status),
            Some(StatusCode::BAD_REQUEST)
        );

        let err = mark_attendance(
            Extension(state.clone()),
            mark_request("ana@gmail.com", 12.9, 200.0),
        )
        .await
        .err();
        assert_eq!(
            err.as_ref().map(ApiError::status),
            Some(StatusCode::UNPROCESSABLE_ENTITY)
        );
        assert!(state.ledger().is_empty().await);
    }

    #[tokio::test]
    async fn send_drains_ledger() {
        let state = Arc::new(AppState::default());
        for email in ["ana@gmail.com", "bo@gmail.com"] {
            let _ =
                mark_attendance(Extension(state.clone()), mark_request(email, 12.9, 77.6)).await;
        }

        let response = send_attendance(
            Extension(state.clone()),
            Json(SendAttendanceRequest {
                teacher_email: "t@school.edu".to_string(),
            }),
        )
        .await;

        let Ok(Json(body)) = response else {
            panic!("expected a delivery");
        };
        assert!(body.success);
        assert_eq!(
            body.message.as_deref(),
            Some("Attendance sent successfully to t@school.edu")
        );
        assert!(state.ledger().is_empty().await);
    }

    #[tokio::test]
    async fn send_refuses_students_and_keeps_ledger() {
        let state = Arc::new(AppState::default());
        let _ = mark_attendance(
            Extension(state.clone()),
            mark_request("ana@gmail.com", 12.9, 77.6),
        )
        .await;

        let err = send_attendance(
            Extension(state.clone()),
            Json(SendAttendanceRequest {
                teacher_email: "ana@gmail.com".to_string(),
            }),
        )
        .await
        .err();

        assert_eq!(
            err.as_ref().map(ApiError::status),
            Some(StatusCode::FORBIDDEN)
        );
        assert_eq!(err.as_ref().map(ApiError::message), Some(TEACHERS_ONLY));
        assert_eq!(state.ledger().len().await, 1);
    }

    #[tokio::test]
    async fn send_rejects_blank_email() {
        let err = send_attendance(
            Extension(Arc::new(AppState::default())),
            Json(SendAttendanceRequest {
                teacher_email: String::new(),
            }),
        )
        .await
        .err();
        assert_eq!(
            err.as_ref().map(ApiError::message),
            Some("teacherEmail is required")
        );
    }
}
