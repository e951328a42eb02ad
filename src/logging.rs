//! Logging initialization for gridboard.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `GBD_LOG` environment variable, falling back to the configured level
//! when the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Configured level (default info)
//! gbd tui
//!
//! # Debug level
//! GBD_LOG=debug gbd tui
//!
//! # Module-specific filtering
//! GBD_LOG=gridboard=debug,warn gbd tui
//! ```

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogConfig;

/// Initialize the tracing subscriber.
///
/// Reads the `GBD_LOG` environment variable for filter directives, falling
/// back to the configured level. Output goes to the configured log file, or
/// stderr when none is set; stderr stays out of the alternate screen the
/// TUI draws on.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_env("GBD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()));

    if config.file.is_empty() {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
    {
        Ok(file) => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .init(),
        Err(e) => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!("could not open log file '{}': {e}", config.file);
        }
    }
}
