use attendance_core::rules::{DEFAULT_TEACHER_DOMAIN, DEFAULT_TEACHER_MARKER};
use clap::{Arg, Command};

pub const ARG_LATENCY_MS: &str = "latency-ms";
pub const ARG_TEACHER_DOMAIN: &str = "teacher-domain";
pub const ARG_TEACHER_MARKER: &str = "teacher-marker";
pub const ARG_CORS_ORIGIN: &str = "cors-origin";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_LATENCY_MS)
                .long(ARG_LATENCY_MS)
                .help("Simulated delay added to every /api call, in milliseconds")
                .default_value("0")
                .env("GEOATTEND_LATENCY_MS")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_TEACHER_DOMAIN)
                .long(ARG_TEACHER_DOMAIN)
                .help("Email domain whose accounts are teachers")
                .default_value(DEFAULT_TEACHER_DOMAIN)
                .env("GEOATTEND_TEACHER_DOMAIN"),
        )
        .arg(
            Arg::new(ARG_TEACHER_MARKER)
                .long(ARG_TEACHER_MARKER)
                .help("Emails containing this marker are teachers")
                .long_help(
                    "Emails containing this marker are teachers. \
                     Pass an empty value to classify by domain only.",
                )
                .default_value(DEFAULT_TEACHER_MARKER)
                .env("GEOATTEND_TEACHER_MARKER"),
        )
        .arg(
            Arg::new(ARG_CORS_ORIGIN)
                .long(ARG_CORS_ORIGIN)
                .help("Allowed browser origin (default: any)")
                .env("GEOATTEND_CORS_ORIGIN"),
        )
}
