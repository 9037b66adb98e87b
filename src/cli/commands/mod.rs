pub mod logging;
pub mod rules;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("geoattend")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("GEOATTEND_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = rules::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_KEYS: [&str; 6] = [
        "GEOATTEND_PORT",
        "GEOATTEND_LATENCY_MS",
        "GEOATTEND_TEACHER_DOMAIN",
        "GEOATTEND_TEACHER_MARKER",
        "GEOATTEND_CORS_ORIGIN",
        "GEOATTEND_LOG_LEVEL",
    ];

    fn clean_env<F: FnOnce()>(f: F) {
        temp_env::with_vars(ENV_KEYS.map(|key| (key, None::<&str>)), f);
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "geoattend");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        clean_env(|| {
            let matches = new().get_matches_from(vec!["geoattend"]);
            assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
            assert_eq!(
                matches.get_one::<u64>(rules::ARG_LATENCY_MS).copied(),
                Some(0)
            );
            assert_eq!(
                matches
                    .get_one::<String>(rules::ARG_TEACHER_DOMAIN)
                    .map(String::as_str),
                Some("school.edu")
            );
            assert_eq!(
                matches
                    .get_one::<String>(rules::ARG_TEACHER_MARKER)
                    .map(String::as_str),
                Some("teacher")
            );
            assert!(matches.get_one::<String>(rules::ARG_CORS_ORIGIN).is_none());
            assert_eq!(
                matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                Some(0)
            );
        });
    }

    #[test]
    fn test_check_args() {
        clean_env(|| {
            let matches = new().get_matches_from(vec![
                "geoattend",
                "--port",
                "9090",
                "--latency-ms",
                "1500",
                "--teacher-domain",
                "faculty.example.org",
                "--teacher-marker",
                "prof",
                "--cors-origin",
                "http://localhost:8081",
            ]);

            assert_eq!(matches.get_one::<u16>("port").copied(), Some(9090));
            assert_eq!(
                matches.get_one::<u64>(rules::ARG_LATENCY_MS).copied(),
                Some(1500)
            );
            assert_eq!(
                matches
                    .get_one::<String>(rules::ARG_TEACHER_DOMAIN)
                    .cloned(),
                Some("faculty.example.org".to_string())
            );
            assert_eq!(
                matches
                    .get_one::<String>(rules::ARG_TEACHER_MARKER)
                    .cloned(),
                Some("prof".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(rules::ARG_CORS_ORIGIN).cloned(),
                Some("http://localhost:8081".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("GEOATTEND_PORT", Some("443")),
                ("GEOATTEND_LATENCY_MS", Some("250")),
                ("GEOATTEND_TEACHER_DOMAIN", Some("uni.edu")),
                ("GEOATTEND_TEACHER_MARKER", Some("staff")),
                ("GEOATTEND_CORS_ORIGIN", Some("https://attend.uni.edu")),
                ("GEOATTEND_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["geoattend"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches.get_one::<u64>(rules::ARG_LATENCY_MS).copied(),
                    Some(250)
                );
                assert_eq!(
                    matches
                        .get_one::<String>(rules::ARG_TEACHER_DOMAIN)
                        .cloned(),
                    Some("uni.edu".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(rules::ARG_CORS_ORIGIN).cloned(),
                    Some("https://attend.uni.edu".to_string())
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("GEOATTEND_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["geoattend"]);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            clean_env(|| {
                let mut args = vec!["geoattend".to_string()];

                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_invalid_latency() {
        clean_env(|| {
            let result = new().try_get_matches_from(vec!["geoattend", "--latency-ms", "soon"]);
            assert_eq!(
                result.map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::ValueValidation)
            );
        });
    }
}
