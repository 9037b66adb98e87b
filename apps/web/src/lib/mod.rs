//! Browser plumbing behind the `attendance_core` traits.
//!
//! - `api`: [`attendance_core::AttendanceApi`] over `fetch` with a 10 s abort timeout.
//! - `platform`: `localStorage` and `Date.now()` as [`attendance_core::KeyValueStore`]
//!   and [`attendance_core::Clock`].
//! - `geolocation`: `navigator.geolocation` as [`attendance_core::Geolocator`].
//! - `google`: the Google Identity Services sign-in button.
//! - `config`: build-time values with the `window.GEOATTEND_CONFIG` override.
//! - `poll`: bounded waiting for the sign-in script.
//!
//! `config`, `http` and `poll` hold no browser types and are tested natively.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
#[cfg(target_arch = "wasm32")]
pub(crate) mod geolocation;
#[cfg(target_arch = "wasm32")]
pub(crate) mod google;
pub(crate) mod http;
#[cfg(target_arch = "wasm32")]
pub(crate) mod platform;
pub(crate) mod poll;

pub(crate) use config::AppConfig;
