//! Request plumbing that does not touch the browser: URL joining and the
//! message shown for a failed response.

use attendance_core::AttendError;
use serde::Deserialize;

/// Maximum number of error body characters surfaced to the UI.
pub const MAX_ERROR_CHARS: usize = 200;

/// Builds a URL from an explicit base URL and the provided path.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// The API answers errors with `{"message": ...}`; anything else is shown
/// trimmed and truncated.
pub fn error_message(body: &str) -> String {
    let trimmed = body.trim();
    let message = json_message(trimmed).unwrap_or_else(|| trimmed.to_string());
    if message.is_empty() {
        "Request failed.".to_string()
    } else {
        message.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Error for a non-success status. `403` is a refusal by the API's rules.
pub fn status_error(status: u16, body: &str) -> AttendError {
    let message = error_message(body);
    if status == 403 {
        AttendError::Denied(message)
    } else {
        AttendError::Http { status, message }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn json_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|error| error.message.trim().to_string())
}
