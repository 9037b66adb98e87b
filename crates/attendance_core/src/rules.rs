//! Placeholder decision rules answered by the attendance API. There is no real
//! geofence or directory lookup behind them.

use crate::types::{Coordinates, LocationCheckResponse, Role};

pub const DEFAULT_TEACHER_DOMAIN: &str = "school.edu";
pub const DEFAULT_TEACHER_MARKER: &str = "teacher";

pub const LOCATION_VERIFIED: &str = "Location verified";
pub const LOCATION_OUT_OF_RANGE: &str = "Location not in allowed range";
pub const ATTENDANCE_MARKED: &str = "Attendance marked successfully";

/// Accepts any location where neither coordinate is exactly zero.
#[must_use]
pub fn check_location(coords: Coordinates) -> LocationCheckResponse {
    #[allow(clippy::float_cmp)]
    let allowed = coords.lat != 0.0 && coords.lng != 0.0;

    LocationCheckResponse {
        allowed,
        message: Some(if allowed {
            LOCATION_VERIFIED.to_string()
        } else {
            LOCATION_OUT_OF_RANGE.to_string()
        }),
    }
}

#[must_use]
pub fn attendance_sent_message(teacher_email: &str) -> String {
    format!("Attendance sent successfully to {teacher_email}")
}

/// Binary teacher/student classification by email.
#[derive(Clone, Debug)]
pub struct RoleRules {
    teacher_domain: String,
    teacher_marker: String,
}

impl Default for RoleRules {
    fn default() -> Self {
        Self::new(DEFAULT_TEACHER_DOMAIN, DEFAULT_TEACHER_MARKER)
    }
}

impl RoleRules {
    /// `teacher_domain` may be given with or without the leading `@`.
    #[must_use]
    pub fn new(teacher_domain: &str, teacher_marker: &str) -> Self {
        let domain = teacher_domain.trim().trim_start_matches('@').to_lowercase();
        Self {
            teacher_domain: format!("@{domain}"),
            teacher_marker: teacher_marker.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn teacher_domain(&self) -> &str {
        &self.teacher_domain
    }

    #[must_use]
    pub fn teacher_marker(&self) -> &str {
        &self.teacher_marker
    }

    /// Anything that does not look like a teacher is a student.
    #[must_use]
    pub fn classify(&self, email: &str) -> Role {
        let email = email.trim().to_lowercase();
        let by_domain = self.teacher_domain.len() > 1 && email.ends_with(&self.teacher_domain);
        let by_marker = !self.teacher_marker.is_empty() && email.contains(&self.teacher_marker);

        if by_domain || by_marker {
            Role::Teacher
        } else {
            Role::Student
        }
    }
}
