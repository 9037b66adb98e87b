//! JSON client for the attendance API. Every call is a `POST` with a 10 s
//! abort timeout, so a hung request surfaces as [`AttendError::Timeout`]
//! instead of leaving a view loading forever.

use super::http::{join_url, status_error};
use attendance_core::{
    AttendError, AttendanceApi, Coordinates,
    types::{
        AttendanceResponse, LocationCheckRequest, LocationCheckResponse, MarkAttendanceRequest,
        SendAttendanceRequest, UserRoleRequest, UserRoleResponse,
    },
};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to every call.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AttendError> {
        let url = join_url(&self.base_url, path);
        let payload = serde_json::to_string(body)
            .map_err(|err| AttendError::Config(format!("Failed to encode request: {err}")))?;

        send_with_timeout(move |signal| {
            Request::post(&url)
                .header("Content-Type", "application/json")
                .abort_signal(Some(signal))
                .body(payload)
                .map_err(|err| AttendError::Config(format!("Failed to build request: {err}")))
        })
        .await
    }
}

impl AttendanceApi for HttpApi {
    async fn check_location(
        &self,
        coords: Coordinates,
    ) -> Result<LocationCheckResponse, AttendError> {
        self.post_json("/api/location/check", &LocationCheckRequest::from(coords))
            .await
    }

    async fn check_user_role(&self, email: &str) -> Result<UserRoleResponse, AttendError> {
        let request = UserRoleRequest {
            email: email.to_string(),
        };
        self.post_json("/api/users/role", &request).await
    }

    async fn mark_attendance(
        &self,
        student_email: &str,
        coords: Coordinates,
    ) -> Result<AttendanceResponse, AttendError> {
        let request = MarkAttendanceRequest {
            student_email: student_email.to_string(),
            lat: coords.lat,
            lng: coords.lng,
        };
        self.post_json("/api/attendance/mark", &request).await
    }

    async fn send_attendance(
        &self,
        teacher_email: &str,
    ) -> Result<AttendanceResponse, AttendError> {
        let request = SendAttendanceRequest {
            teacher_email: teacher_email.to_string(),
        };
        self.post_json("/api/attendance/send", &request).await
    }
}

/// Maps network errors into user-facing variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AttendError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        timed_out()
    } else {
        AttendError::Network(message)
    }
}

fn timed_out() -> AttendError {
    AttendError::Timeout("Request timed out. Please try again.".to_string())
}

/// Sends a request and reads its body under one abort timeout, so a stalled
/// body read fails like a stalled connection.
async fn send_with_timeout<T: DeserializeOwned>(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AttendError>,
) -> Result<T, AttendError> {
    let controller = AbortController::new()
        .map_err(|_| AttendError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    let response = request.send().await.map_err(map_request_error)?;
    handle_json_response(response, &signal).await
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: Response,
    signal: &web_sys::AbortSignal,
) -> Result<T, AttendError> {
    if response.ok() {
        response.json::<T>().await.map_err(|err| {
            if signal.aborted() {
                timed_out()
            } else {
                AttendError::Decode(format!("Failed to decode response: {err}"))
            }
        })
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if signal.aborted() {
            return Err(timed_out());
        }
        Err(status_error(status, &body))
    }
}
