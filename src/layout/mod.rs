//! Layout system for the dashboard.
//!
//! A layout is one [`LayoutEntry`] per active widget per [`Breakpoint`],
//! collected in a [`BreakpointLayouts`] map. Entries use grid units: `x`/`w`
//! in columns of the breakpoint's grid, `y`/`h` in rows. The serialized form
//! keeps the wire names of the persisted record (`i`, `x`, `y`, `w`, `h`,
//! `minW`, `minH`).
//!
//! Placement and collision resolution are delegated to the injected
//! [`GridEngine`]; [`Y_BOTTOM`] marks an entry whose vertical position the
//! engine still has to resolve.

mod defaults;
mod engine;

pub use defaults::default_layouts;
pub use engine::{GridEngine, RowPackEngine};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel row meaning "place at the logical bottom of the grid".
///
/// Newly added widgets carry this until the grid engine resolves their
/// actual position on the next reflow.
pub const Y_BOTTOM: u32 = u32::MAX;

/// Position and size of one widget within one breakpoint's grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Id of the widget this entry positions.
    #[serde(rename = "i")]
    pub id: String,
    /// Column of the left edge.
    pub x: u32,
    /// Row of the top edge, or [`Y_BOTTOM`].
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
    /// Lower bound on `w`.
    #[serde(rename = "minW")]
    pub min_w: u32,
    /// Lower bound on `h`.
    #[serde(rename = "minH")]
    pub min_h: u32,
}

impl LayoutEntry {
    /// Creates an entry with the standard minimum size bounds.
    pub fn new(id: &str, x: u32, y: u32, w: u32, h: u32, min_w: u32, min_h: u32) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            w,
            h,
            min_w,
            min_h,
        }
    }

    /// Returns `true` if the rectangles of `self` and `other` intersect.
    ///
    /// Entries still carrying [`Y_BOTTOM`] never overlap anything; they have
    /// no resolved position yet.
    pub fn overlaps(&self, other: &LayoutEntry) -> bool {
        if self.y == Y_BOTTOM || other.y == Y_BOTTOM {
            return false;
        }
        // Saturating edges: persisted coordinates are untrusted input.
        self.x < other.x.saturating_add(other.w)
            && other.x < self.x.saturating_add(self.w)
            && self.y < other.y.saturating_add(other.h)
            && other.y < self.y.saturating_add(self.h)
    }
}

/// A named viewport-width tier with its own column count and layout.
///
/// The set is fixed; serialized as `"lg"` / `"md"` / `"sm"` to match the
/// persisted record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Breakpoint {
    /// Wide terminals.
    #[serde(rename = "lg")]
    Large,
    /// Medium terminals.
    #[serde(rename = "md")]
    Medium,
    /// Everything narrower.
    #[serde(rename = "sm")]
    Small,
}

impl Breakpoint {
    /// All breakpoints, widest first.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Large, Breakpoint::Medium, Breakpoint::Small];

    /// The wire name of this breakpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Large => "lg",
            Breakpoint::Medium => "md",
            Breakpoint::Small => "sm",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-breakpoint ordered layout entries.
///
/// Invariant (best effort): every active widget id has an entry in every
/// breakpoint. The dashboard maintains this on add/remove; the engine never
/// creates or deletes entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointLayouts(BTreeMap<Breakpoint, Vec<LayoutEntry>>);

impl BreakpointLayouts {
    /// Creates an empty layout map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries of one breakpoint (empty slice if none).
    pub fn entries(&self, bp: Breakpoint) -> &[LayoutEntry] {
        self.0.get(&bp).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces the entries of one breakpoint.
    pub fn set_entries(&mut self, bp: Breakpoint, entries: Vec<LayoutEntry>) {
        self.0.insert(bp, entries);
    }

    /// Appends an entry to one breakpoint.
    pub fn push_entry(&mut self, bp: Breakpoint, entry: LayoutEntry) {
        self.0.entry(bp).or_default().push(entry);
    }

    /// Finds a widget's entry within one breakpoint.
    pub fn entry(&self, bp: Breakpoint, id: &str) -> Option<&LayoutEntry> {
        self.entries(bp).iter().find(|e| e.id == id)
    }

    /// Deletes a widget's entry from every breakpoint.
    pub fn remove_widget(&mut self, id: &str) {
        for entries in self.0.values_mut() {
            entries.retain(|e| e.id != id);
        }
    }

    /// Returns `true` if any breakpoint has an entry for the id.
    pub fn contains(&self, id: &str) -> bool {
        self.0.values().any(|v| v.iter().any(|e| e.id == id))
    }
}

/// Column count and minimum terminal width of one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointSpec {
    /// Columns in this breakpoint's grid.
    pub cols: u32,
    /// Minimum terminal width (in cells) for this breakpoint to apply.
    pub min_width: u16,
}

/// The breakpoint→columns and breakpoint→min-width tables handed to the
/// grid engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Spec for [`Breakpoint::Large`].
    pub large: BreakpointSpec,
    /// Spec for [`Breakpoint::Medium`].
    pub medium: BreakpointSpec,
    /// Spec for [`Breakpoint::Small`].
    pub small: BreakpointSpec,
}

impl GridConfig {
    /// The [`BreakpointSpec`] of one breakpoint.
    pub fn spec(&self, bp: Breakpoint) -> BreakpointSpec {
        match bp {
            Breakpoint::Large => self.large,
            Breakpoint::Medium => self.medium,
            Breakpoint::Small => self.small,
        }
    }

    /// The column count of one breakpoint.
    pub fn cols(&self, bp: Breakpoint) -> u32 {
        self.spec(bp).cols
    }

    /// Selects the widest breakpoint whose minimum width fits the terminal.
    pub fn breakpoint_for(&self, width: u16) -> Breakpoint {
        for bp in [Breakpoint::Large, Breakpoint::Medium] {
            if width >= self.spec(bp).min_width {
                return bp;
            }
        }
        Breakpoint::Small
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            large: BreakpointSpec {
                cols: 12,
                min_width: 120,
            },
            medium: BreakpointSpec {
                cols: 10,
                min_width: 90,
            },
            small: BreakpointSpec {
                cols: 6,
                min_width: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, x: u32, y: u32, w: u32, h: u32) -> LayoutEntry {
        LayoutEntry::new(id, x, y, w, h, 2, 4)
    }

    // -- LayoutEntry --

    #[test]
    fn test_overlaps_detects_intersection() {
        let a = entry("a", 0, 0, 4, 4);
        let b = entry("b", 2, 2, 4, 4);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_false_for_adjacent() {
        let a = entry("a", 0, 0, 4, 4);
        let right = entry("b", 4, 0, 4, 4);
        let below = entry("c", 0, 4, 4, 4);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_overlaps_ignores_unresolved_entries() {
        let a = entry("a", 0, 0, 4, 4);
        let pending = entry("b", 0, Y_BOTTOM, 4, 4);
        assert!(!a.overlaps(&pending));
        assert!(!pending.overlaps(&a));
    }

    #[test]
    fn test_entry_serializes_with_wire_names() {
        let e = entry("total-budgets", 4, 0, 4, 8);
        let json = serde_json::to_string(&e).expect("serialize");
        assert!(json.contains("\"i\":\"total-budgets\""));
        assert!(json.contains("\"minW\":2"));
        assert!(json.contains("\"minH\":4"));
    }

    // -- Breakpoint --

    #[test]
    fn test_breakpoint_wire_names() {
        assert_eq!(Breakpoint::Large.as_str(), "lg");
        assert_eq!(Breakpoint::Medium.as_str(), "md");
        assert_eq!(Breakpoint::Small.as_str(), "sm");
    }

    #[test]
    fn test_breakpoint_all_is_widest_first() {
        assert_eq!(
            Breakpoint::ALL,
            [Breakpoint::Large, Breakpoint::Medium, Breakpoint::Small]
        );
    }

    // -- BreakpointLayouts --

    #[test]
    fn test_layouts_entries_empty_for_missing_breakpoint() {
        let layouts = BreakpointLayouts::new();
        assert!(layouts.entries(Breakpoint::Large).is_empty());
    }

    #[test]
    fn test_layouts_push_and_lookup() {
        let mut layouts = BreakpointLayouts::new();
        layouts.push_entry(Breakpoint::Large, entry("a", 0, 0, 4, 4));
        assert!(layouts.contains("a"));
        assert_eq!(
            layouts
                .entry(Breakpoint::Large, "a")
                .map(|e| (e.x, e.y)),
            Some((0, 0))
        );
        assert!(layouts.entry(Breakpoint::Medium, "a").is_none());
    }

    #[test]
    fn test_layouts_remove_widget_clears_all_breakpoints() {
        let mut layouts = BreakpointLayouts::new();
        for bp in Breakpoint::ALL {
            layouts.push_entry(bp, entry("a", 0, 0, 4, 4));
            layouts.push_entry(bp, entry("b", 4, 0, 4, 4));
        }
        layouts.remove_widget("a");
        assert!(!layouts.contains("a"));
        for bp in Breakpoint::ALL {
            assert_eq!(layouts.entries(bp).len(), 1);
        }
    }

    #[test]
    fn test_layouts_serialize_as_breakpoint_keyed_map() {
        let mut layouts = BreakpointLayouts::new();
        layouts.push_entry(Breakpoint::Large, entry("a", 0, 0, 4, 4));
        let json = serde_json::to_string(&layouts).expect("serialize");
        assert!(json.starts_with("{\"lg\":["));
        let back: BreakpointLayouts = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, layouts);
    }

    // -- GridConfig --

    #[test]
    fn test_breakpoint_for_width_thresholds() {
        let config = GridConfig::default();
        assert_eq!(config.breakpoint_for(200), Breakpoint::Large);
        assert_eq!(config.breakpoint_for(120), Breakpoint::Large);
        assert_eq!(config.breakpoint_for(119), Breakpoint::Medium);
        assert_eq!(config.breakpoint_for(90), Breakpoint::Medium);
        assert_eq!(config.breakpoint_for(89), Breakpoint::Small);
        assert_eq!(config.breakpoint_for(0), Breakpoint::Small);
    }

    #[test]
    fn test_default_column_counts() {
        let config = GridConfig::default();
        assert_eq!(config.cols(Breakpoint::Large), 12);
        assert_eq!(config.cols(Breakpoint::Medium), 10);
        assert_eq!(config.cols(Breakpoint::Small), 6);
    }
}
