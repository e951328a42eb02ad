//! Widget catalog for the dashboard.
//!
//! This module defines [`WidgetDefinition`], the immutable description of a
//! widget, and [`WidgetCatalog`], the fixed compiled-in list of every widget
//! the dashboard knows about.
//!
//! # Architecture
//!
//! The catalog is process-wide constant state: definitions are never created
//! or destroyed at runtime. The dashboard holds an ordered list of *active*
//! widget ids; the catalog answers id lookups, membership checks, and the
//! title filtering used by the selector panel. Widget content is a
//! placeholder string until real widget implementations exist.
//!
//! # Example
//!
//! ```
//! use gridboard::widgets::WidgetCatalog;
//!
//! let catalog = WidgetCatalog::new();
//! assert!(catalog.contains("total-budgets"));
//! assert!(catalog.get("nonexistent").is_none());
//!
//! let tasks = catalog.filter_by_title("task");
//! assert!(!tasks.is_empty());
//! ```

pub mod card;

use serde::{Deserialize, Serialize};

/// Placeholder content shown by every catalog widget until a real
/// implementation replaces it.
pub const PLACEHOLDER_CONTENT: &str = "Not implemented";

/// Widgets shown on a fresh dashboard with no persisted state.
const DEFAULT_WIDGETS: &[(&str, &str)] = &[
    ("total-budgeted-capex", "Total Budgeted CapEx"),
    ("total-budgets", "Total Budgets"),
    ("total-budgeted-opex", "Total Budgeted OpEx"),
    ("projects-by-project-type", "Projects by Project Type"),
    ("budget-monitoring", "Budget Monitoring"),
];

/// Additional widgets available only through the selector panel.
const ADDITIONAL_WIDGETS: &[(&str, &str)] = &[
    ("open-tasks-by-health", "Open Tasks by Health"),
    ("open-tasks-by-priority", "Open Tasks by Priority"),
    ("open-tasks-by-assignee", "Open Tasks by Assignee"),
    ("approval-tasks", "Approval Tasks"),
    ("review-tasks", "Review Tasks"),
    ("task-completion", "Task Completion"),
    ("task-status", "Task Status"),
    ("task-deadlines", "Task Deadlines"),
    ("task-dashboard", "Task Dashboard"),
    ("due-this-week", "Due This Week"),
    ("overdue-tasks", "Overdue Tasks"),
    ("red-flag-tasks", "Red Flag Tasks"),
    ("delay-project-completion", "Delay Project Completion"),
];

/// Immutable description of a widget: a stable catalog key, a display
/// title, and the content to render.
///
/// Serializable because the persisted widget record stores the
/// catalog-derived definitions of the currently active widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDefinition {
    /// Unique, stable catalog key.
    pub id: String,
    /// Human-readable title shown in the card header and selector.
    pub title: String,
    /// Display content. Currently always [`PLACEHOLDER_CONTENT`].
    pub content: String,
}

impl WidgetDefinition {
    fn placeholder(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: PLACEHOLDER_CONTENT.to_string(),
        }
    }
}

/// The fixed catalog of all known widgets.
///
/// Ordered: default widgets first, then the selector-only additions. The
/// order determines selector listing and the order of persisted widget
/// records, mirroring insertion order semantics of the active set.
#[derive(Debug, Clone)]
pub struct WidgetCatalog {
    defs: Vec<WidgetDefinition>,
}

impl WidgetCatalog {
    /// Creates the catalog with all built-in widget definitions.
    pub fn new() -> Self {
        let defs = DEFAULT_WIDGETS
            .iter()
            .chain(ADDITIONAL_WIDGETS)
            .map(|(id, title)| WidgetDefinition::placeholder(id, title))
            .collect();
        Self { defs }
    }

    /// Looks up a widget definition by id.
    pub fn get(&self, id: &str) -> Option<&WidgetDefinition> {
        self.defs.iter().find(|d| d.id == id)
    }

    /// Returns `true` if the catalog knows the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDefinition> {
        self.defs.iter()
    }

    /// Number of known widgets.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns `true` if the catalog is empty (never the case for the
    /// built-in catalog).
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Ids of the widgets shown on a fresh dashboard.
    pub fn default_ids(&self) -> Vec<String> {
        DEFAULT_WIDGETS
            .iter()
            .map(|(id, _)| (*id).to_string())
            .collect()
    }

    /// Definitions whose titles contain `pattern` as a case-insensitive
    /// substring. An empty pattern matches everything.
    pub fn filter_by_title(&self, pattern: &str) -> Vec<&WidgetDefinition> {
        let needle = pattern.to_lowercase();
        self.defs
            .iter()
            .filter(|d| d.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// The catalog filtered to the given active ids, in catalog order.
    ///
    /// This is the shape of the persisted widget record: full definitions,
    /// not bare ids. Unknown ids are skipped.
    pub fn definitions_for(&self, ids: &[String]) -> Vec<WidgetDefinition> {
        self.defs
            .iter()
            .filter(|d| ids.iter().any(|id| *id == d.id))
            .cloned()
            .collect()
    }
}

impl Default for WidgetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
