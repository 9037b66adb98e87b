//! Location gate: obtain device coordinates, have the API check them and
//! remember the verified location so later loads can skip the check.

use crate::{
    api::AttendanceApi,
    error::{AttendError, ErrorClass},
    storage::{KeyValueStore, LOCATION_KEY, load_json, save_json},
    types::Coordinates,
};
use std::{future::Future, str::FromStr};
use tracing::{debug, warn};

pub const REQUESTING_PERMISSION: &str = "Requesting location permission...";
pub const VERIFYING_WITH_SERVER: &str = "Verifying location with server...";
pub const VERIFIED: &str = "Location verified successfully!";
pub const NOT_IN_ALLOWED_AREA: &str = "You are not in the allowed area to access this system.";

/// Delay between showing the success state and leaving the gate.
pub const HANDOVER_DELAY_MS: u32 = 800;

/// Platform position source, bounded in time by the platform.
pub trait Geolocator {
    fn current_position(&self) -> impl Future<Output = Result<Coordinates, AttendError>>;
}

/// Whether a stored verified location may skip the remote check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocationPolicy {
    #[default]
    TrustStored,
    Reverify,
}

impl FromStr for LocationPolicy {
    type Err = AttendError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "trust" | "trust_stored" => Ok(Self::TrustStored),
            "reverify" => Ok(Self::Reverify),
            other => Err(AttendError::Config(format!(
                "unknown location policy: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GateStatus {
    Checking(String),
    Allowed(Coordinates),
    Denied(String),
    Error(String),
}

impl GateStatus {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Checking(message) | Self::Denied(message) | Self::Error(message) => message,
            Self::Allowed(_) => VERIFIED,
        }
    }

    /// Denied and error states offer a manual retry.
    #[must_use]
    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Denied(_) | Self::Error(_))
    }
}

pub struct LocationGate<S> {
    store: S,
    policy: LocationPolicy,
}

impl<S: KeyValueStore> LocationGate<S> {
    pub const fn new(store: S, policy: LocationPolicy) -> Self {
        Self { store, policy }
    }

    /// The persisted verified location. Unparseable or out-of-range records are removed.
    pub fn stored(&self) -> Option<Coordinates> {
        let coords: Coordinates = load_json(&self.store, LOCATION_KEY)?;
        if coords.is_valid() {
            Some(coords)
        } else {
            warn!("discarding out-of-range stored location");
            self.store.remove(LOCATION_KEY);
            None
        }
    }

    /// A stored location that lets the gate be skipped under the current policy.
    pub fn resume(&self) -> Option<Coordinates> {
        match self.policy {
            LocationPolicy::TrustStored => self.stored(),
            LocationPolicy::Reverify => None,
        }
    }

    /// Runs the full check. `report` receives the intermediate `Checking` states;
    /// the final state is returned. Rejected coordinates are never persisted.
    pub async fn verify<G, A>(
        &self,
        geolocator: &G,
        api: &A,
        mut report: impl FnMut(GateStatus),
    ) -> GateStatus
    where
        G: Geolocator,
        A: AttendanceApi,
    {
        report(GateStatus::Checking(REQUESTING_PERMISSION.to_string()));
        let coords = match geolocator.current_position().await {
            Ok(coords) => coords,
            Err(err) => return failed(&err),
        };

        report(GateStatus::Checking(VERIFYING_WITH_SERVER.to_string()));
        let response = match api.check_location(coords).await {
            Ok(response) => response,
            Err(err) => return failed(&err),
        };

        if !response.allowed {
            debug!("location rejected by server");
            return GateStatus::Denied(
                response
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| NOT_IN_ALLOWED_AREA.to_string()),
            );
        }

        if let Err(err) = save_json(&self.store, LOCATION_KEY, &coords) {
            return failed(&err);
        }
        debug!("location verified and stored");
        GateStatus::Allowed(coords)
    }
}

/// Refusals by a business rule read as a denial, everything else as an error.
fn failed(err: &AttendError) -> GateStatus {
    match err.class() {
        ErrorClass::Denied => GateStatus::Denied(err.to_string()),
        ErrorClass::Platform | ErrorClass::Remote | ErrorClass::Decode => {
            GateStatus::Error(err.to_string())
        }
    }
}
