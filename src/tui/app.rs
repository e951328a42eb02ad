//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! `App` wires the dashboard state to the grid engine and the persisted
//! store: key actions mutate the state, layout edits run through the engine
//! and come back via `apply_layout_change`, and persistence happens exactly
//! when a transition reports it.

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};

use crate::config::Config;
use crate::dashboard::DashboardState;
use crate::layout::{Breakpoint, BreakpointLayouts, GridConfig, GridEngine, RowPackEngine};
use crate::storage::StateStore;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::selector::SelectorState;
use crate::tui::ui::render_dashboard;
use crate::widgets::WidgetCatalog;

/// How long transient footer messages stay visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Which panel receives keys while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// The widget grid.
    Grid,
    /// The selector panel.
    Selector,
}

/// Core application state for the TUI.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// The dashboard state core.
    pub state: DashboardState,
    /// The fixed widget catalog.
    pub catalog: WidgetCatalog,
    /// Persisted layout/widget records.
    pub store: StateStore,
    /// Injected grid placement engine.
    pub engine: Box<dyn GridEngine>,
    /// Breakpoint column/width tables.
    pub grid_config: GridConfig,
    /// Selector panel state.
    pub selector: SelectorState,
    /// Focused panel while editing.
    pub panel: Panel,
    /// Index of the focused widget in the visible id list.
    pub focused: usize,
    /// Breakpoint of the last render, the target of move/resize keys.
    pub current_breakpoint: Breakpoint,
    /// Transient footer message with its expiry.
    pub status_message: Option<(String, Instant)>,
    tick_rate: Duration,
}

impl App {
    /// Creates the app: restores persisted state and wires the default
    /// grid engine.
    pub fn new(config: &Config, store: StateStore) -> Self {
        let catalog = WidgetCatalog::new();
        let state = DashboardState::restore(&store, &catalog);
        Self {
            should_quit: false,
            tick_count: 0,
            state,
            catalog,
            store,
            engine: Box::new(RowPackEngine),
            grid_config: config.grid.to_grid_config(),
            selector: SelectorState::new(),
            panel: Panel::Grid,
            focused: 0,
            current_breakpoint: Breakpoint::Large,
            status_message: None,
            tick_rate: config.tui.tick_rate_duration(),
        }
    }

    /// The id of the focused widget, if any are visible.
    pub fn focused_id(&self) -> Option<&str> {
        self.state.visible_ids().get(self.focused).map(String::as_str)
    }

    /// Moves focus to the next widget, wrapping around.
    pub fn focus_next(&mut self) {
        let count = self.state.visible_ids().len();
        if count == 0 {
            return;
        }
        self.focused = (self.focused + 1) % count;
    }

    /// Moves focus to the previous widget, wrapping around.
    pub fn focus_prev(&mut self) {
        let count = self.state.visible_ids().len();
        if count == 0 {
            return;
        }
        self.focused = self.focused.checked_sub(1).unwrap_or(count - 1);
    }

    /// Clamps focus after the visible set shrinks.
    fn clamp_focus(&mut self) {
        let count = self.state.visible_ids().len();
        if count == 0 {
            self.focused = 0;
        } else if self.focused >= count {
            self.focused = count - 1;
        }
    }

    /// Shows a transient message in the footer.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_TTL));
    }

    /// Starts an edit session.
    pub fn enter_edit(&mut self) {
        self.state.enter_edit();
        self.panel = Panel::Grid;
        self.selector.clear();
    }

    /// Discards the edit session and reverts to the committed state.
    pub fn cancel_edit(&mut self) {
        if !self.state.editing() {
            return;
        }
        self.state.cancel_edit();
        self.panel = Panel::Grid;
        self.selector.clear();
        self.clamp_focus();
        self.set_status("Changes discarded");
    }

    /// Commits the edit session and persists both records.
    pub fn save_changes(&mut self) {
        if !self.state.save_changes() {
            return;
        }
        self.panel = Panel::Grid;
        self.selector.clear();
        self.clamp_focus();

        let mut failed = !self.persist_layouts();
        let widgets = self.catalog.definitions_for(self.state.active_ids());
        if let Err(e) = self.store.save_widgets(&widgets) {
            tracing::warn!("failed to persist widget list: {e}");
            failed = true;
        }
        self.set_status(if failed {
            "Saved with errors (see log)"
        } else {
            "Changes saved"
        });
    }

    /// Adds or removes the widget under the selector cursor.
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selector.selected(&self.catalog).map(|d| d.id.clone()) else {
            return;
        };
        if self.state.visible_ids().iter().any(|w| *w == id) {
            self.remove_widget(&id);
        } else {
            self.add_widget(&id);
        }
    }

    /// Removes the focused grid widget.
    pub fn remove_focused(&mut self) {
        if let Some(id) = self.focused_id().map(str::to_string) {
            self.remove_widget(&id);
        }
    }

    /// Stages a widget addition and lets the engine place it.
    fn add_widget(&mut self, id: &str) {
        if self.state.add_widget(id, &self.catalog) {
            // The new entries carry Y_BOTTOM until the engine resolves them.
            self.reflow_all();
        }
    }

    /// Stages a widget removal.
    fn remove_widget(&mut self, id: &str) {
        if self.state.remove_widget(id) {
            self.clamp_focus();
        }
    }

    /// Moves the focused widget by grid units within the current breakpoint.
    pub fn move_focused(&mut self, dx: i32, dy: i32) {
        if !self.state.editing() {
            return;
        }
        let Some(id) = self.focused_id().map(str::to_string) else {
            return;
        };
        let bp = self.current_breakpoint;
        let cols = self.grid_config.cols(bp);
        let mut layouts = self.state.visible_layouts().clone();
        let mut entries = layouts.entries(bp).to_vec();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return;
        };
        let max_x = i64::from(cols.saturating_sub(entry.w));
        entry.x = (i64::from(entry.x) + i64::from(dx)).clamp(0, max_x) as u32;
        entry.y = (i64::from(entry.y) + i64::from(dy)).max(0) as u32;
        layouts.set_entries(bp, self.engine.reflow(&entries, cols));
        self.apply_layouts(layouts);
    }

    /// Resizes the focused widget by grid units within the current breakpoint.
    pub fn resize_focused(&mut self, dw: i32, dh: i32) {
        if !self.state.editing() {
            return;
        }
        let Some(id) = self.focused_id().map(str::to_string) else {
            return;
        };
        let bp = self.current_breakpoint;
        let cols = self.grid_config.cols(bp);
        let mut layouts = self.state.visible_layouts().clone();
        let mut entries = layouts.entries(bp).to_vec();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return;
        };
        let min_w = i64::from(entry.min_w.max(1));
        entry.w = (i64::from(entry.w) + i64::from(dw)).clamp(min_w, i64::from(cols)) as u32;
        let min_h = i64::from(entry.min_h.max(1));
        entry.h = (i64::from(entry.h) + i64::from(dh)).max(min_h) as u32;
        layouts.set_entries(bp, self.engine.reflow(&entries, cols));
        self.apply_layouts(layouts);
    }

    /// Runs every breakpoint through the engine and applies the result.
    fn reflow_all(&mut self) {
        let mut layouts = self.state.visible_layouts().clone();
        for bp in Breakpoint::ALL {
            let cols = self.grid_config.cols(bp);
            let entries = self.engine.reflow(layouts.entries(bp), cols);
            layouts.set_entries(bp, entries);
        }
        self.apply_layouts(layouts);
    }

    /// Feeds recalculated layouts back into the state; persists when the
    /// state says the change is committed (i.e. made outside edit mode).
    fn apply_layouts(&mut self, layouts: BreakpointLayouts) {
        if self.state.apply_layout_change(layouts) {
            self.persist_layouts();
        }
    }

    /// Writes the committed layouts, returning `false` on failure.
    fn persist_layouts(&mut self) -> bool {
        match self.store.save_layouts(self.state.committed_layouts()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to persist layouts: {e}");
                false
            }
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop,
    /// restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).expect("failed to create ratatui terminal instance");
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        loop {
            terminal.draw(|frame| render_dashboard(frame, self))?;

            let event = event_handler.next(&mut reader).await?;
            match event {
                Event::Key(key) => match handle_key_event(self, key) {
                    Action::Quit => {
                        self.should_quit = true;
                        return Ok(());
                    }
                    Action::EnterEdit => self.enter_edit(),
                    Action::SaveChanges => self.save_changes(),
                    Action::CancelEdit => self.cancel_edit(),
                    Action::ToggleSelected => self.toggle_selected(),
                    Action::RemoveFocused => self.remove_focused(),
                    Action::MoveFocused { dx, dy } => self.move_focused(dx, dy),
                    Action::ResizeFocused { dw, dh } => self.resize_focused(dw, dh),
                    Action::None => {}
                },
                Event::Tick => {
                    self.tick_count += 1;
                }
                Event::Resize(_, _) => {
                    // Terminal auto-handles resize on next draw
                }
            }
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}
