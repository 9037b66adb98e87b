//! # attendance_core
//!
//! Platform-free logic for the location-gated attendance client and the
//! attendance API:
//!
//! - [`location`]: location gate (device position, remote check, persisted result).
//! - [`identity`]: identity assertion decoding and role lookup.
//! - [`session`]: in-memory session state and the screen it selects.
//! - [`timer`]: the teacher's persisted, wall-clock driven attendance window.
//! - [`student`]: the student's single "mark present" submission.
//! - [`toast`]: single-slot transient notifications.
//! - [`rules`]: placeholder decisions answered by the API.
//!
//! Platform services are reached through small traits ([`AttendanceApi`],
//! [`Geolocator`], [`KeyValueStore`], [`Clock`]) so every flow runs natively in
//! tests and on wasm32 in the browser.

pub mod api;
pub mod clock;
mod error;
pub mod identity;
pub mod location;
pub mod rules;
pub mod scope;
pub mod session;
pub mod storage;
pub mod student;
pub mod timer;
pub mod toast;
pub mod types;

pub use api::AttendanceApi;
pub use clock::Clock;
pub use error::{AttendError, ErrorClass};
pub use location::{Geolocator, LocationPolicy};
pub use storage::KeyValueStore;
pub use types::{Coordinates, Identity, Role};
