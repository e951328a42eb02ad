//! Grid placement engine.
//!
//! The dashboard delegates collision resolution and placement to a
//! [`GridEngine`]; the dashboard itself only edits entry coordinates and
//! feeds the result through the engine. Any implementation may be
//! substituted as long as reflowed entries stay within the column count,
//! never overlap, and carry no unresolved [`Y_BOTTOM`] rows.

use super::{LayoutEntry, Y_BOTTOM};

/// Resolves widget placement within one breakpoint's grid.
pub trait GridEngine {
    /// Recomputes entry positions for a grid `cols` columns wide.
    ///
    /// Input entries may overlap or carry [`Y_BOTTOM`]; the result has every
    /// entry clamped to the grid, non-overlapping, and fully positioned.
    fn reflow(&self, entries: &[LayoutEntry], cols: u32) -> Vec<LayoutEntry>;
}

/// Built-in engine: vertically compacting row packer.
///
/// Entries are processed in (y, x) order with unresolved entries last, and
/// each is placed at the lowest row where its column span is free. This
/// matches the vertical-compaction behavior of the grid library the
/// dashboard was modeled on: widgets float upward, and a widget dropped
/// onto an occupied area is pushed below it.
#[derive(Debug, Default, Clone, Copy)]
pub struct RowPackEngine;

impl GridEngine for RowPackEngine {
    fn reflow(&self, entries: &[LayoutEntry], cols: u32) -> Vec<LayoutEntry> {
        let cols = cols.max(1);
        let mut items: Vec<LayoutEntry> = entries.to_vec();

        for e in &mut items {
            let min_w = e.min_w.clamp(1, cols);
            e.w = e.w.clamp(min_w, cols);
            e.h = e.h.max(e.min_h.max(1));
            if e.x > cols - e.w {
                e.x = cols - e.w;
            }
        }

        // Y_BOTTOM sorts last, so new widgets land below everything else.
        items.sort_by_key(|e| (e.y, e.x));

        let mut placed: Vec<LayoutEntry> = Vec::with_capacity(items.len());
        for mut item in items {
            let mut y = 0;
            loop {
                item.y = y;
                if !placed.iter().any(|p| p.overlaps(&item)) {
                    break;
                }
                y += 1;
            }
            placed.push(item);
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_layouts;
    use crate::layout::Breakpoint;

    fn entry(id: &str, x: u32, y: u32, w: u32, h: u32) -> LayoutEntry {
        LayoutEntry::new(id, x, y, w, h, 2, 4)
    }

    fn assert_no_overlaps(entries: &[LayoutEntry]) {
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert!(!a.overlaps(b), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_reflow_empty_input() {
        assert!(RowPackEngine.reflow(&[], 12).is_empty());
    }

    #[test]
    fn test_reflow_single_entry_floats_to_top() {
        let out = RowPackEngine.reflow(&[entry("a", 0, 7, 4, 4)], 12);
        assert_eq!(out[0].y, 0);
        assert_eq!(out[0].x, 0);
    }

    #[test]
    fn test_reflow_preserves_default_layout() {
        // The compiled-in defaults are already packed; reflow must not
        // rearrange them.
        let layouts = default_layouts();
        for bp in Breakpoint::ALL {
            let cols = match bp {
                Breakpoint::Large => 12,
                Breakpoint::Medium => 10,
                Breakpoint::Small => 6,
            };
            let mut expected: Vec<LayoutEntry> = layouts.entries(bp).to_vec();
            expected.sort_by_key(|e| (e.y, e.x));
            let out = RowPackEngine.reflow(layouts.entries(bp), cols);
            assert_eq!(out, expected, "breakpoint {bp}");
        }
    }

    #[test]
    fn test_reflow_resolves_overlap() {
        let out = RowPackEngine.reflow(
            &[entry("a", 0, 0, 4, 4), entry("b", 2, 0, 4, 4)],
            12,
        );
        assert_no_overlaps(&out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_reflow_places_y_bottom_below_existing() {
        let out = RowPackEngine.reflow(
            &[entry("a", 0, 0, 12, 8), entry("new", 0, Y_BOTTOM, 4, 4)],
            12,
        );
        let new = out.iter().find(|e| e.id == "new").expect("new entry kept");
        assert_eq!(new.y, 8);
        assert_no_overlaps(&out);
    }

    #[test]
    fn test_reflow_clamps_width_to_columns() {
        let out = RowPackEngine.reflow(&[entry("a", 0, 0, 10, 4)], 6);
        assert_eq!(out[0].w, 6);
    }

    #[test]
    fn test_reflow_clamps_x_within_grid() {
        let out = RowPackEngine.reflow(&[entry("a", 10, 0, 4, 4)], 12);
        assert_eq!(out[0].x, 8);
    }

    #[test]
    fn test_reflow_enforces_minimum_size() {
        let out = RowPackEngine.reflow(&[entry("a", 0, 0, 1, 1)], 12);
        assert_eq!(out[0].w, 2);
        assert_eq!(out[0].h, 4);
    }

    #[test]
    fn test_reflow_is_idempotent() {
        let input = vec![
            entry("a", 0, 3, 4, 4),
            entry("b", 2, 1, 4, 4),
            entry("c", 0, Y_BOTTOM, 6, 4),
        ];
        let once = RowPackEngine.reflow(&input, 12);
        let twice = RowPackEngine.reflow(&once, 12);
        assert_eq!(once, twice);
        assert_no_overlaps(&twice);
        assert!(twice.iter().all(|e| e.y != Y_BOTTOM));
    }

    #[test]
    fn test_reflow_side_by_side_stays_side_by_side() {
        let out = RowPackEngine.reflow(
            &[entry("a", 0, 0, 6, 4), entry("b", 6, 0, 6, 4)],
            12,
        );
        assert!(out.iter().all(|e| e.y == 0));
    }
}
