use thiserror::Error;

/// Broad error classes used to decide how a failure is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Location permission denied, the platform lacks a capability, or local
    /// storage refused a write.
    Platform,
    /// Transport or remote-call failure.
    Remote,
    /// Malformed identity assertion or persisted record.
    Decode,
    /// The request was understood and refused by a business rule.
    Denied,
}

/// Errors surfaced by attendance flows. `Display` is the user-facing message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AttendError {
    #[error("Location permission denied. Please enable location access and try again.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("Geolocation is not supported by your browser.")]
    Unsupported,
    #[error("{0}")]
    Timeout(String),
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("{0}")]
    Decode(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{0}")]
    Denied(String),
    #[error("Location not found")]
    LocationNotFound,
    #[error("No credential received")]
    NoCredential,
    #[error("An attendance session is already active")]
    WindowActive,
    #[error("Config error: {0}")]
    Config(String),
}

impl AttendError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::PermissionDenied
            | Self::PositionUnavailable
            | Self::Unsupported
            | Self::Storage(_) => ErrorClass::Platform,
            Self::Timeout(_) | Self::Network(_) | Self::Http { .. } | Self::Config(_) => {
                ErrorClass::Remote
            }
            Self::Decode(_) | Self::LocationNotFound | Self::NoCredential => ErrorClass::Decode,
            Self::Denied(_) | Self::WindowActive => ErrorClass::Denied,
        }
    }
}

impl From<serde_json::Error> for AttendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("Invalid JSON: {err}"))
    }
}
