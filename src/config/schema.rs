//! TOML configuration schema types for gridboard.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults
//! via `#[serde(default)]`, so a partial (or empty) config file is always
//! valid. Duration fields use human-readable strings (e.g. `"250ms"`)
//! parsed by the `humantime` crate at the call site.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::layout::{BreakpointSpec, GridConfig};

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [tui]
/// [grid.large]
/// [grid.medium]
/// [grid.small]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// TUI behavior settings.
    pub tui: TuiConfig,
    /// Grid breakpoint tables handed to the grid engine.
    pub grid: GridSection,
    /// Logging settings.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// TUI behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl TuiConfig {
    /// Parses `tick_rate`, falling back to 250ms on invalid input.
    pub fn tick_rate_duration(&self) -> Duration {
        humantime::parse_duration(&self.tick_rate).unwrap_or_else(|_| {
            tracing::warn!("invalid tick_rate '{}', using 250ms", self.tick_rate);
            Duration::from_millis(250)
        })
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Per-breakpoint grid configuration: the breakpoint→columns and
/// breakpoint→minimum-width tables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GridSection {
    /// Wide terminals.
    pub large: BreakpointSection,
    /// Medium terminals.
    pub medium: BreakpointSection,
    /// Everything narrower.
    pub small: BreakpointSection,
}

impl GridSection {
    /// Converts the TOML section into the runtime [`GridConfig`].
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            large: self.large.to_spec(),
            medium: self.medium.to_spec(),
            small: self.small.to_spec(),
        }
    }
}

impl Default for GridSection {
    fn default() -> Self {
        let defaults = GridConfig::default();
        Self {
            large: BreakpointSection::from_spec(defaults.large),
            medium: BreakpointSection::from_spec(defaults.medium),
            small: BreakpointSection::from_spec(defaults.small),
        }
    }
}

/// Column count and minimum terminal width of one breakpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BreakpointSection {
    /// Columns in this breakpoint's grid.
    pub cols: u32,
    /// Minimum terminal width (cells) for this breakpoint to apply.
    pub min_width: u16,
}

impl BreakpointSection {
    fn to_spec(&self) -> BreakpointSpec {
        BreakpointSpec {
            cols: self.cols.max(1),
            min_width: self.min_width,
        }
    }

    fn from_spec(spec: BreakpointSpec) -> Self {
        Self {
            cols: spec.cols,
            min_width: spec.min_width,
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the TOML `[log]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The tracing filter directive for this level.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
