//! Gridboard library
//!
//! This crate provides a terminal widget-grid dashboard: a fixed catalog of
//! named widgets arranged on a responsive grid, rearranged and resized while
//! in edit mode, and persisted across sessions as JSON records in the user's
//! data directory.
//!
//! # Architecture
//!
//! - [`widgets`]: the compiled-in widget catalog and card rendering.
//! - [`layout`]: layout entries, breakpoints, and the grid engine that
//!   resolves widget placement.
//! - [`dashboard`]: the state core holding committed vs. draft layouts, the
//!   edit session, and the transitions between them.
//! - [`storage`]: the persisted layout and widget records.
//! - [`config`]: TOML configuration with XDG path resolution.
//! - [`tui`]: the terminal user interface built on ratatui and crossterm.
//!
//! Persistence happens only at explicit commit points: saving an edit
//! session, or a layout change made outside edit mode. Cancelling an edit
//! session discards its draft atomically.

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Dashboard state core: committed/draft layouts and edit sessions.
pub mod dashboard;

/// Layout entries, breakpoints, and the grid engine.
pub mod layout;

/// Logging initialization built on tracing.
pub mod logging;

/// Persisted layout and widget records.
pub mod storage;

/// TUI module providing the terminal user interface for the dashboard.
pub mod tui;

/// Widget catalog and card rendering.
pub mod widgets;

pub use dashboard::DashboardState;
pub use layout::{
    Breakpoint, BreakpointLayouts, GridConfig, GridEngine, LayoutEntry, RowPackEngine, Y_BOTTOM,
};
pub use storage::{StateStore, StorageError};
pub use widgets::{WidgetCatalog, WidgetDefinition};
