use crate::api;
use anyhow::Result;
use attendance_core::rules::RoleRules;
use std::time::Duration;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub latency: Duration,
    pub teacher_domain: String,
    pub teacher_marker: String,
    pub cors_origin: Option<String>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the CORS origin is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let config = api::Config {
        port: args.port,
        latency: args.latency,
        rules: RoleRules::new(&args.teacher_domain, &args.teacher_marker),
        cors_origin: args.cors_origin,
    };
    info!("{}", startup_message("Startup configuration", &startup_entries(&config)));

    api::new(config).await
}

/// Logged values are the normalized rules, not the raw flags.
fn startup_entries(config: &api::Config) -> Vec<(&'static str, String)> {
    let or_none = |value: &str| {
        if value.is_empty() {
            "none".to_string()
        } else {
            value.to_string()
        }
    };
    vec![
        ("listen", format!("tcp:{}", config.port)),
        ("latency_ms", config.latency.as_millis().to_string()),
        ("teacher_domain", or_none(config.rules.teacher_domain())),
        ("teacher_marker", or_none(config.rules.teacher_marker())),
        (
            "cors_origin",
            config
                .cors_origin
                .clone()
                .unwrap_or_else(|| "any".to_string()),
        ),
    ]
}

fn startup_message(title: &str, entries: &[(&str, String)]) -> String {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    message
}

fn banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    BANNER.replace(
        "{VERSION}",
        &format!(" - {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    hash.trim().chars().take(7).collect()
}

const BANNER: &str = r"
      .---.
     /  o  \
     \     /
      \   /
       \ /   G E O A T T E N D {VERSION}
        '";
