//! Application session state and the screen it selects. The session starts
//! anonymous, becomes authenticated after a successful identity resolution and
//! returns to anonymous on logout. Nothing here is persisted.

use crate::types::{Identity, Role};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppSession {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl AppSession {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }

    pub fn login(&mut self, identity: Identity) {
        debug!(role = identity.role.as_str(), "session authenticated");
        *self = Self::Authenticated(identity);
    }

    pub fn logout(&mut self) {
        debug!("session cleared");
        *self = Self::Anonymous;
    }
}

/// Top-level screen, chosen from the location gate result and the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    LocationCheck,
    Login,
    TeacherDashboard,
    StudentDashboard,
}

impl Screen {
    #[must_use]
    pub fn select(location_verified: bool, session: &AppSession) -> Self {
        match session.role() {
            None if !location_verified => Self::LocationCheck,
            None => Self::Login,
            Some(Role::Teacher) => Self::TeacherDashboard,
            Some(Role::Student) => Self::StudentDashboard,
        }
    }
}
