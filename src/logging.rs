//! Tracing setup.
//!
//! While the terminal UI runs it owns stdout, so interactive sessions log to
//! a file. Script mode logs to stderr and keeps stdout for its JSON output.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that overrides the config.
pub const LOG_ENV_VAR: &str = "LEMONADE_LOG";

/// Where log lines go.
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Only the first call has an effect.
pub fn init_tracing(target: LogTarget<'_>, default_level: &str) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    // A second init (e.g. from tests) fails harmlessly.
    let _ = match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
    };
    Ok(())
}
