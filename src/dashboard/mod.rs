//! Dashboard state core.
//!
//! [`DashboardState`] owns the canonical active-widget list and the
//! committed per-breakpoint layouts, plus an optional [`EditSession`]
//! holding the draft layouts and staged active list while editing.
//!
//! Transitions are plain methods; persistence is an explicit side effect
//! performed by the caller exactly when a transition reports it. Cancelling
//! a session discards the draft and the staged active changes atomically;
//! quitting mid-session is equivalent to cancelling, since nothing from a
//! live session is ever persisted.

use crate::layout::{default_layouts, Breakpoint, BreakpointLayouts, LayoutEntry, Y_BOTTOM};
use crate::storage::StateStore;
use crate::widgets::WidgetCatalog;

/// Height of a newly added widget, in grid rows.
const NEW_WIDGET_H: u32 = 4;
/// Minimum size bounds of a newly added widget.
const NEW_WIDGET_MIN_W: u32 = 2;
const NEW_WIDGET_MIN_H: u32 = 4;

/// Transient edit state: the draft layouts and the staged active list.
#[derive(Debug, Clone)]
struct EditSession {
    draft: BreakpointLayouts,
    staged: Vec<String>,
}

/// The dashboard's state: committed layouts, active widgets, and the
/// in-progress edit session if one exists.
#[derive(Debug, Clone)]
pub struct DashboardState {
    active: Vec<String>,
    committed: BreakpointLayouts,
    session: Option<EditSession>,
}

impl DashboardState {
    /// Creates a state from an active-widget list and committed layouts,
    /// not editing.
    pub fn new(active: Vec<String>, committed: BreakpointLayouts) -> Self {
        Self {
            active,
            committed,
            session: None,
        }
    }

    /// Restores state from the persisted records, falling back to the
    /// compiled-in defaults on absence or failure. Never fails.
    ///
    /// Ids in the persisted widget record that the catalog no longer knows
    /// are dropped.
    pub fn restore(store: &StateStore, catalog: &WidgetCatalog) -> Self {
        let committed = match store.load_layouts() {
            Ok(Some(layouts)) => layouts,
            Ok(None) => {
                tracing::debug!("no persisted layouts, using defaults");
                default_layouts()
            }
            Err(e) => {
                tracing::warn!("failed to load persisted layouts, using defaults: {e}");
                default_layouts()
            }
        };

        let active = match store.load_widgets() {
            Ok(Some(defs)) => defs
                .into_iter()
                .map(|d| d.id)
                .filter(|id| {
                    let known = catalog.contains(id);
                    if !known {
                        tracing::warn!("dropping unknown persisted widget id '{id}'");
                    }
                    known
                })
                .collect(),
            Ok(None) => {
                tracing::debug!("no persisted widget list, using defaults");
                catalog.default_ids()
            }
            Err(e) => {
                tracing::warn!("failed to load persisted widget list, using defaults: {e}");
                catalog.default_ids()
            }
        };

        Self::new(active, committed)
    }

    /// Returns `true` while an edit session is active.
    pub fn editing(&self) -> bool {
        self.session.is_some()
    }

    /// The committed (persisted, authoritative) layouts.
    pub fn committed_layouts(&self) -> &BreakpointLayouts {
        &self.committed
    }

    /// The committed active-widget ids.
    pub fn active_ids(&self) -> &[String] {
        &self.active
    }

    /// The layouts to render: the draft while editing, committed otherwise.
    pub fn visible_layouts(&self) -> &BreakpointLayouts {
        match &self.session {
            Some(session) => &session.draft,
            None => &self.committed,
        }
    }

    /// The widget ids to render: staged while editing, committed otherwise.
    pub fn visible_ids(&self) -> &[String] {
        match &self.session {
            Some(session) => &session.staged,
            None => &self.active,
        }
    }

    /// Enters edit mode, snapshotting the committed state into a fresh
    /// session. No-op if already editing.
    pub fn enter_edit(&mut self) {
        if self.session.is_some() {
            return;
        }
        self.session = Some(EditSession {
            draft: self.committed.clone(),
            staged: self.active.clone(),
        });
    }

    /// Discards the edit session: draft layouts and staged active changes
    /// revert to the last committed state. No-op outside edit mode.
    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    /// Commits the edit session: the draft becomes the committed layouts
    /// and the staged list becomes the active list.
    ///
    /// Returns `true` if a session was committed, in which case the caller
    /// must persist both the layouts and the catalog-filtered widget list.
    #[must_use]
    pub fn save_changes(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                self.committed = session.draft;
                self.active = session.staged;
                true
            }
            None => false,
        }
    }

    /// Stages a widget for addition.
    ///
    /// No-op (returning `false`) if the id is unknown to the catalog,
    /// already staged, or no edit session is active. Otherwise appends the
    /// id to the staged list and synthesizes one draft entry per breakpoint
    /// at the logical bottom of the grid, leaving actual placement to the
    /// grid engine.
    pub fn add_widget(&mut self, id: &str, catalog: &WidgetCatalog) -> bool {
        if !catalog.contains(id) {
            tracing::debug!("ignoring add of unknown widget '{id}'");
            return false;
        }
        let Some(session) = &mut self.session else {
            tracing::debug!("ignoring add of '{id}' outside edit mode");
            return false;
        };
        if session.staged.iter().any(|w| w == id) {
            return false;
        }

        session.staged.push(id.to_string());
        for bp in Breakpoint::ALL {
            let w = match bp {
                Breakpoint::Large => 4,
                Breakpoint::Medium | Breakpoint::Small => 3,
            };
            session.draft.push_entry(
                bp,
                LayoutEntry::new(
                    id,
                    0,
                    Y_BOTTOM,
                    w,
                    NEW_WIDGET_H,
                    NEW_WIDGET_MIN_W,
                    NEW_WIDGET_MIN_H,
                ),
            );
        }
        true
    }

    /// Stages a widget for removal: drops the id from the staged list and
    /// deletes its draft entry from every breakpoint.
    ///
    /// No-op (returning `false`) for inactive ids or outside edit mode.
    pub fn remove_widget(&mut self, id: &str) -> bool {
        let Some(session) = &mut self.session else {
            tracing::debug!("ignoring remove of '{id}' outside edit mode");
            return false;
        };
        let before = session.staged.len();
        session.staged.retain(|w| w != id);
        if session.staged.len() == before {
            return false;
        }
        session.draft.remove_widget(id);
        true
    }

    /// Accepts recalculated layouts from the grid engine.
    ///
    /// While editing, only the draft is updated and nothing is persisted
    /// (edits are provisional). Otherwise the committed layouts are updated
    /// and the caller must persist them immediately; the return value says
    /// which. Safe to call in both modes.
    #[must_use]
    pub fn apply_layout_change(&mut self, layouts: BreakpointLayouts) -> bool {
        match &mut self.session {
            Some(session) => {
                session.draft = layouts;
                false
            }
            None => {
                self.committed = layouts;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_state() -> (DashboardState, WidgetCatalog) {
        let catalog = WidgetCatalog::new();
        let state = DashboardState::new(catalog.default_ids(), default_layouts());
        (state, catalog)
    }

    // -- Mode transitions --

    #[test]
    fn test_new_state_is_not_editing() {
        let (state, _) = default_state();
        assert!(!state.editing());
        assert_eq!(state.visible_ids(), state.active_ids());
    }

    #[test]
    fn test_enter_edit_snapshots_committed_state() {
        let (mut state, _) = default_state();
        state.enter_edit();
        assert!(state.editing());
        assert_eq!(state.visible_layouts(), state.committed_layouts());
        assert_eq!(state.visible_ids(), state.active_ids());
    }

    #[test]
    fn test_enter_edit_twice_keeps_session() {
        let (mut state, catalog) = default_state();
        state.enter_edit();
        assert!(state.add_widget("task-status", &catalog));
        state.enter_edit();
        // The staged addition survives the redundant call.
        assert!(state.visible_ids().contains(&"task-status".to_string()));
    }

    #[test]
    fn test_reentering_edit_resnapshots_from_committed() {
        let (mut state, catalog) = default_state();
        state.enter_edit();
        assert!(state.add_widget("task-status", &catalog));
        state.cancel_edit();
        state.enter_edit();
        assert!(!state.visible_ids().contains(&"task-status".to_string()));
    }

    // -- Cancel: full rollback --

    #[test]
    fn test_cancel_discards_staged_add_and_remove() {
        let (mut state, catalog) = default_state();
        let before_active = state.active_ids().to_vec();
        let before_layouts = state.committed_layouts().clone();

        state.enter_edit();
        assert!(state.add_widget("task-status", &catalog));
        assert!(state.remove_widget("total-budgets"));
        state.cancel_edit();

        assert!(!state.editing());
        assert_eq!(state.active_ids(), before_active.as_slice());
        assert_eq!(state.committed_layouts(), &before_layouts);
        assert!(state.active_ids().contains(&"total-budgets".to_string()));
    }

    #[test]
    fn test_cancel_discards_draft_layout_changes() {
        let (mut state, _) = default_state();
        let before = state.committed_layouts().clone();

        state.enter_edit();
        let mut moved = state.visible_layouts().clone();
        let mut entries = moved.entries(Breakpoint::Large).to_vec();
        entries[0].x += 2;
        moved.set_entries(Breakpoint::Large, entries);
        assert!(!state.apply_layout_change(moved));
        state.cancel_edit();

        assert_eq!(state.committed_layouts(), &before);
    }

    // -- Save: commit --

    #[test]
    fn test_save_commits_staged_set_and_draft() {
        let (mut state, catalog) = default_state();
        state.enter_edit();
        assert!(state.add_widget("task-status", &catalog));
        assert!(state.remove_widget("budget-monitoring"));
        assert!(state.save_changes());

        assert!(!state.editing());
        assert!(state.active_ids().contains(&"task-status".to_string()));
        assert!(!state.active_ids().contains(&"budget-monitoring".to_string()));
        assert!(state.committed_layouts().contains("task-status"));
        assert!(!state.committed_layouts().contains("budget-monitoring"));
    }

    #[test]
    fn test_save_outside_edit_mode_reports_nothing() {
        let (mut state, _) = default_state();
        assert!(!state.save_changes());
    }

    // -- AddWidget --

    #[test]
    fn test_add_widget_creates_entry_in_every_breakpoint() {
        let (mut state, catalog) = default_state();
        state.enter_edit();
        assert!(state.add_widget("task-status", &catalog));

        for bp in Breakpoint::ALL {
            let entry = state
                .visible_layouts()
                .entry(bp, "task-status")
                .expect("entry in every breakpoint");
            assert_eq!(entry.y, Y_BOTTOM);
            assert_eq!(entry.min_w, 2);
            assert_eq!(entry.min_h, 4);
        }
        let large = state
            .visible_layouts()
            .entry(Breakpoint::Large, "task-status")
            .expect("large entry");
        assert_eq!(large.w, 4);
        let small = state
            .visible_layouts()
            .entry(Breakpoint::Small, "task-status")
            .expect("small entry");
        assert_eq!(small.w, 3);
    }

    #[test]
    fn test_add_widget_is_idempotent() {
        let (mut state, catalog) = default_state();
        state.enter_edit();
        assert!(state.add_widget("task-status", &catalog));
        let ids = state.visible_ids().to_vec();
        let layouts = state.visible_layouts().clone();

        assert!(!state.add_widget("task-status", &catalog));
        assert_eq!(state.visible_ids(), ids.as_slice());
        assert_eq!(state.visible_layouts(), &layouts);
    }

    #[test]
    fn test_add_widget_unknown_id_is_noop() {
        let (mut state, catalog) = default_state();
        state.enter_edit();
        let ids = state.visible_ids().to_vec();
        assert!(!state.add_widget("bogus", &catalog));
        assert_eq!(state.visible_ids(), ids.as_slice());
    }

    #[test]
    fn test_add_widget_outside_edit_mode_is_noop() {
        let (mut state, catalog) = default_state();
        assert!(!state.add_widget("task-status", &catalog));
        assert!(!state.active_ids().contains(&"task-status".to_string()));
        assert!(!state.committed_layouts().contains("task-status"));
    }

    // -- RemoveWidget --

    #[test]
    fn test_remove_widget_deletes_entries_everywhere() {
        let (mut state, _) = default_state();
        state.enter_edit();
        assert!(state.remove_widget("total-budgets"));
        assert!(!state.visible_ids().contains(&"total-budgets".to_string()));
        for bp in Breakpoint::ALL {
            assert!(state.visible_layouts().entry(bp, "total-budgets").is_none());
        }
    }

    #[test]
    fn test_remove_widget_inactive_id_is_noop() {
        let (mut state, _) = default_state();
        state.enter_edit();
        let ids = state.visible_ids().to_vec();
        let layouts = state.visible_layouts().clone();
        assert!(!state.remove_widget("task-status"));
        assert_eq!(state.visible_ids(), ids.as_slice());
        assert_eq!(state.visible_layouts(), &layouts);
    }

    #[test]
    fn test_remove_widget_outside_edit_mode_is_noop() {
        let (mut state, _) = default_state();
        assert!(!state.remove_widget("total-budgets"));
        assert!(state.active_ids().contains(&"total-budgets".to_string()));
    }

    // -- OnLayoutChanged --

    #[test]
    fn test_layout_change_while_editing_touches_draft_only() {
        let (mut state, _) = default_state();
        let committed = state.committed_layouts().clone();
        state.enter_edit();

        let mut layouts = state.visible_layouts().clone();
        let mut entries = layouts.entries(Breakpoint::Large).to_vec();
        entries[0].y += 4;
        layouts.set_entries(Breakpoint::Large, entries);

        assert!(!state.apply_layout_change(layouts.clone()));
        assert_eq!(state.visible_layouts(), &layouts);
        assert_eq!(state.committed_layouts(), &committed);
    }

    #[test]
    fn test_layout_change_outside_edit_mode_commits_and_persists() {
        let (mut state, _) = default_state();
        let mut layouts = state.committed_layouts().clone();
        let mut entries = layouts.entries(Breakpoint::Small).to_vec();
        entries[0].x = 1;
        layouts.set_entries(Breakpoint::Small, entries);

        assert!(state.apply_layout_change(layouts.clone()));
        assert_eq!(state.committed_layouts(), &layouts);
    }

    // -- Add then save then remove across sessions --

    #[test]
    fn test_full_session_sequence() {
        let (mut state, catalog) = default_state();

        state.enter_edit();
        assert!(state.add_widget("task-status", &catalog));
        assert!(state.save_changes());
        assert!(state.active_ids().contains(&"task-status".to_string()));

        state.enter_edit();
        assert!(state.remove_widget("task-status"));
        state.cancel_edit();
        assert!(state.active_ids().contains(&"task-status".to_string()));

        state.enter_edit();
        assert!(state.remove_widget("task-status"));
        assert!(state.save_changes());
        assert!(!state.active_ids().contains(&"task-status".to_string()));
    }
}
