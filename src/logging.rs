//! Logging setup for the posture dashboard.
//!
//! Uses `tracing` with an `EnvFilter`. The `PDASH_LOG` environment variable
//! overrides the configured level with standard filter directives:
//!
//! ```text
//! # Debug level
//! PDASH_LOG=debug pdash tui
//!
//! # Module-specific filtering
//! PDASH_LOG=posture_dashboard=debug,warn pdash tui
//! ```
//!
//! Non-TUI subcommands log to stderr. While the TUI owns the terminal,
//! stderr output would corrupt the display, so the `tui` subcommand only
//! initializes logging when a log file is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

/// Build the filter: `PDASH_LOG` wins, otherwise the configured level.
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env("PDASH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the tracing subscriber writing to stderr.
///
/// Used by non-TUI subcommands where stderr is free.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init_stderr(level: LogLevel) {
    fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize the tracing subscriber appending to a log file.
///
/// ANSI colors are disabled since the output is a plain file.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_file(level: LogLevel, path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    #[test]
    fn env_filter_parses_valid_directives() {
        // Verify common filter strings parse without error
        let directives = ["info", "debug", "warn", "error", "trace"];
        for d in directives {
            let filter = EnvFilter::try_new(d);
            assert!(filter.is_ok(), "failed to parse directive: {}", d);
        }
    }

    #[test]
    fn env_filter_parses_module_directive() {
        let filter = EnvFilter::try_new("posture_dashboard=debug,warn");
        assert!(filter.is_ok());
    }
}
