//! Route handlers for the attendance API.
//!
//! Every `/api` handler validates its body first, then waits for the
//! configured latency, then answers with the placeholder rules.

pub mod attendance;
pub mod health;
pub mod location;
pub mod role;
pub mod root;

use super::error::ApiError;
use attendance_core::Coordinates;

pub const INVALID_COORDINATES: &str =
    "Invalid coordinates: latitude must be within [-90, 90] and longitude within [-180, 180]";

pub(crate) fn valid_coordinates(lat: f64, lng: f64) -> Result<Coordinates, ApiError> {
    let coords = Coordinates::new(lat, lng);
    if coords.is_valid() {
        Ok(coords)
    } else {
        Err(ApiError::unprocessable(INVALID_COORDINATES))
    }
}

/// Trimmed email, or a 400 naming the missing field.
pub(crate) fn required_email(email: &str, field: &str) -> Result<String, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        Err(ApiError::bad_request(format!("{field} is required")))
    } else {
        Ok(email.to_string())
    }
}
