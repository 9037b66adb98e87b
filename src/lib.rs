//! # geoattend (Attendance API)
//!
//! `geoattend` answers the four remote calls made by the location-gated
//! attendance web client:
//!
//! | Route | Call |
//! |---|---|
//! | `POST /api/location/check` | is the device inside the allowed area |
//! | `POST /api/users/role` | teacher or student for an email |
//! | `POST /api/attendance/mark` | record a student as present |
//! | `POST /api/attendance/send` | deliver the recorded attendance for a teacher |
//!
//! The decisions are placeholders shared with the client through
//! `attendance_core::rules`: any location with non-zero coordinates is allowed
//! and teachers are recognised by email domain or marker. Marks live in an
//! in-memory ledger that a send drains; nothing is persisted.
//!
//! An optional per-call latency (`--latency-ms`) reproduces the delays a real
//! backend would add, which keeps the client's loading states observable.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
