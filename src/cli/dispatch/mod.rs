use crate::cli::{
    actions::{Action, server::Args},
    commands::rules::{ARG_CORS_ORIGIN, ARG_LATENCY_MS, ARG_TEACHER_DOMAIN, ARG_TEACHER_MARKER},
};
use anyhow::{Result, bail};
use attendance_core::rules::{DEFAULT_TEACHER_DOMAIN, DEFAULT_TEACHER_MARKER};
use std::time::Duration;

/// # Errors
/// Returns an error if the arguments are inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);
    let latency = Duration::from_millis(
        matches
            .get_one::<u64>(ARG_LATENCY_MS)
            .copied()
            .unwrap_or(0),
    );

    let teacher_domain = matches
        .get_one::<String>(ARG_TEACHER_DOMAIN)
        .map_or(DEFAULT_TEACHER_DOMAIN, String::as_str)
        .trim()
        .to_string();
    let teacher_marker = matches
        .get_one::<String>(ARG_TEACHER_MARKER)
        .map_or(DEFAULT_TEACHER_MARKER, String::as_str)
        .trim()
        .to_string();

    if teacher_domain.trim_start_matches('@').is_empty() && teacher_marker.is_empty() {
        bail!("--teacher-domain and --teacher-marker cannot both be empty");
    }

    let cors_origin = matches
        .get_one::<String>(ARG_CORS_ORIGIN)
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty() && origin != "*");

    Ok(Action::Server(Args {
        port,
        latency,
        teacher_domain,
        teacher_marker,
        cors_origin,
    }))
}
