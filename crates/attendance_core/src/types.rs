//! Wire and storage types shared by the client and the attendance API. Field
//! names are camelCase on the wire and in local storage.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and inside the WGS84 ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

/// Signed-in user. Lives in memory only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LocationCheckRequest {
    pub lat: f64,
    pub lng: f64,
}

impl From<Coordinates> for LocationCheckRequest {
    fn from(coords: Coordinates) -> Self {
        Self {
            lat: coords.lat,
            lng: coords.lng,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LocationCheckResponse {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRoleRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRoleResponse {
    pub role: Role,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub student_email: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SendAttendanceRequest {
    pub teacher_email: String,
}

/// Shared response for mark and send calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AttendanceResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_validate_ranges() {
        assert!(Coordinates::new(12.9, 77.6).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 1.0).is_valid());
    }

    #[test]
    fn role_serializes_lowercase() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&UserRoleResponse {
            role: Role::Teacher,
            email: "a@school.edu".to_string(),
        })?;
        assert_eq!(json, r#"{"role":"teacher","email":"a@school.edu"}"#);
        Ok(())
    }

    #[test]
    fn mark_request_uses_camel_case() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(MarkAttendanceRequest {
            student_email: "b@gmail.com".to_string(),
            lat: 1.5,
            lng: 2.5,
        })?;
        assert_eq!(json["studentEmail"], "b@gmail.com");
        assert_eq!(json["lat"], 1.5);
        Ok(())
    }

    #[test]
    fn optional_message_is_omitted() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&AttendanceResponse {
            success: true,
            message: None,
        })?;
        assert_eq!(json, r#"{"success":true}"#);

        let parsed: LocationCheckResponse = serde_json::from_str(r#"{"allowed":false}"#)?;
        assert!(!parsed.allowed);
        assert_eq!(parsed.message, None);
        Ok(())
    }
}
