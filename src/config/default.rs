//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
/// Sections: `[tui]`, `[grid.*]`, `[log]`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Gridboard Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/gridboard/config.toml

# ==============================================================================
# TUI Configuration
# ==============================================================================

[tui]

# Render tick rate as a human-readable duration.
# Controls how often the TUI redraws. Lower values = smoother but more CPU.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# ==============================================================================
# Grid Configuration
# ==============================================================================
#
# Each breakpoint defines a column count and the minimum terminal width
# (in cells) at which it applies. The widest breakpoint whose min_width
# fits the terminal wins; "small" should keep min_width = 0 as the
# catch-all tier.

[grid.large]
cols = 12
min_width = 120

[grid.medium]
cols = 10
min_width = 90

[grid.small]
cols = 6
min_width = 0

# ==============================================================================
# Logging Configuration
# ==============================================================================

[log]

# Logging verbosity level.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Path to log file. Empty string means log to stderr.
# Examples: "~/.local/share/gridboard/gbd.log"
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup = path.with_extension("toml.backup");
        fs::copy(&path, &backup).map_err(|e| ConfigError::WriteError {
            path: backup,
            source: e,
        })?;
        tracing::info!("Backed up existing configuration to {}.backup", path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to the given path, creating parent
/// directories as needed.
fn write_default_config(path: &std::path::Path) -> Result<(), ConfigError> {
    xdg::ensure_config_dir().map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
