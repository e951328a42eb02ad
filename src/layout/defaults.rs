//! Compiled-in default layouts.
//!
//! These mirror the five default widgets and are the fallback whenever the
//! persisted layout record is absent or unreadable.

use super::{Breakpoint, BreakpointLayouts, LayoutEntry};

/// (id, x, y, w, h) per breakpoint; every default entry uses min 2x4.
const LARGE: &[(&str, u32, u32, u32, u32)] = &[
    ("total-budgeted-capex", 0, 0, 4, 8),
    ("total-budgets", 4, 0, 4, 8),
    ("total-budgeted-opex", 8, 0, 4, 4),
    ("projects-by-project-type", 8, 4, 4, 4),
    ("budget-monitoring", 8, 8, 4, 4),
];

const MEDIUM: &[(&str, u32, u32, u32, u32)] = &[
    ("total-budgeted-capex", 0, 0, 3, 8),
    ("total-budgets", 3, 0, 3, 8),
    ("total-budgeted-opex", 6, 0, 4, 4),
    ("projects-by-project-type", 6, 4, 4, 4),
    ("budget-monitoring", 6, 8, 4, 4),
];

const SMALL: &[(&str, u32, u32, u32, u32)] = &[
    ("total-budgeted-capex", 0, 0, 3, 6),
    ("total-budgets", 3, 0, 3, 6),
    ("total-budgeted-opex", 0, 6, 3, 4),
    ("projects-by-project-type", 3, 6, 3, 4),
    ("budget-monitoring", 0, 10, 6, 4),
];

const MIN_W: u32 = 2;
const MIN_H: u32 = 4;

/// Builds the default per-breakpoint layouts for the five default widgets.
pub fn default_layouts() -> BreakpointLayouts {
    let mut layouts = BreakpointLayouts::new();
    for (bp, table) in [
        (Breakpoint::Large, LARGE),
        (Breakpoint::Medium, MEDIUM),
        (Breakpoint::Small, SMALL),
    ] {
        let entries = table
            .iter()
            .map(|&(id, x, y, w, h)| LayoutEntry::new(id, x, y, w, h, MIN_W, MIN_H))
            .collect();
        layouts.set_entries(bp, entries);
    }
    layouts
}
