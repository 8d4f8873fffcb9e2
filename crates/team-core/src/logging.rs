//! Process-level logging initialization for team consumers.
//!
//! The library itself only emits `tracing` events; binaries and tests that
//! want to see them call [`init`].

use std::sync::OnceLock;

/// Environment variable selecting the log level
pub const LOG_ENV: &str = "TEAM_LOG";

static INIT: OnceLock<()> = OnceLock::new();

fn level_from(value: Option<&str>) -> tracing::Level {
    match value.unwrap_or("info").to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Install a fmt subscriber at the level named by `TEAM_LOG`.
///
/// The default level is `info`, so the warnings [`Team::add_all`] emits for
/// skipped duplicates are visible unless `TEAM_LOG` is `error`.
///
/// Returns `true` only for the call that installed the subscriber. Later
/// calls, and calls made after some other global subscriber was set, return
/// `false` and change nothing.
///
/// [`Team::add_all`]: crate::Team::add_all
pub fn init() -> bool {
    let mut installed = false;
    INIT.get_or_init(|| {
        let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
        installed = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .is_ok();
    });
    installed
}
