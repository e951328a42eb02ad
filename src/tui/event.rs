//! Event handling for the TUI.
//!
//! Wraps crossterm events, adds a tick variant for periodic UI refresh, and
//! maps key presses to dashboard actions. Move/resize keys are only mapped
//! while an edit session is active; outside edit mode the layout is
//! read-only.

use crate::tui::app::{App, Panel};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Start an edit session.
    EnterEdit,
    /// Commit the edit session and persist.
    SaveChanges,
    /// Discard the edit session.
    CancelEdit,
    /// Add or remove the widget under the selector cursor.
    ToggleSelected,
    /// Remove the focused grid widget.
    RemoveFocused,
    /// Move the focused grid widget by grid units.
    MoveFocused {
        /// Columns to move by.
        dx: i32,
        /// Rows to move by.
        dy: i32,
    },
    /// Resize the focused grid widget by grid units.
    ResizeFocused {
        /// Columns to grow by.
        dw: i32,
        /// Rows to grow by.
        dh: i32,
    },
}

/// Handles a key event by dispatching to the appropriate app method or action.
///
/// Outside edit mode only focus navigation, `e`, and quit are live. While
/// editing, keys route to the focused panel: the grid (move/resize/remove/
/// save/cancel) or the selector (filter text, cursor, toggle).
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: Ctrl-C quits from anywhere, even mid-filter.
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Action::Quit;
    }

    if !app.state.editing() {
        return handle_view_key(app, key);
    }

    match app.panel {
        Panel::Grid => handle_grid_key(app, key),
        Panel::Selector => handle_selector_key(app, key),
    }
}

/// Key handling outside edit mode: the layout is read-only.
fn handle_view_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('e') => Action::EnterEdit,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            app.focus_next();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus_prev();
            Action::None
        }
        _ => Action::None,
    }
}

/// Key handling while editing with the grid focused.
fn handle_grid_key(app: &mut App, key: KeyEvent) -> Action {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('s') => Action::SaveChanges,
        KeyCode::Esc => Action::CancelEdit,
        KeyCode::Tab => {
            app.panel = Panel::Selector;
            Action::None
        }
        KeyCode::Char('x') | KeyCode::Delete => Action::RemoveFocused,
        KeyCode::Char('n') => {
            app.focus_next();
            Action::None
        }
        KeyCode::Char('p') => {
            app.focus_prev();
            Action::None
        }
        // Shift-arrows and HJKL resize; plain arrows and hjkl move.
        KeyCode::Left if shift => Action::ResizeFocused { dw: -1, dh: 0 },
        KeyCode::Right if shift => Action::ResizeFocused { dw: 1, dh: 0 },
        KeyCode::Up if shift => Action::ResizeFocused { dw: 0, dh: -1 },
        KeyCode::Down if shift => Action::ResizeFocused { dw: 0, dh: 1 },
        KeyCode::Char('H') => Action::ResizeFocused { dw: -1, dh: 0 },
        KeyCode::Char('L') => Action::ResizeFocused { dw: 1, dh: 0 },
        KeyCode::Char('K') => Action::ResizeFocused { dw: 0, dh: -1 },
        KeyCode::Char('J') => Action::ResizeFocused { dw: 0, dh: 1 },
        KeyCode::Char('h') | KeyCode::Left => Action::MoveFocused { dx: -1, dy: 0 },
        KeyCode::Char('l') | KeyCode::Right => Action::MoveFocused { dx: 1, dy: 0 },
        KeyCode::Char('k') | KeyCode::Up => Action::MoveFocused { dx: 0, dy: -1 },
        KeyCode::Char('j') | KeyCode::Down => Action::MoveFocused { dx: 0, dy: 1 },
        _ => Action::None,
    }
}

/// Key handling while editing with the selector focused.
///
/// Printable characters feed the filter, so save/cancel are reachable only
/// after leaving the panel with Tab or Esc.
fn handle_selector_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => {
            app.panel = Panel::Grid;
            Action::None
        }
        KeyCode::Up => {
            app.selector.move_up();
            Action::None
        }
        KeyCode::Down => {
            let len = app.selector.visible(&app.catalog).len();
            app.selector.move_down(len);
            Action::None
        }
        KeyCode::Enter => Action::ToggleSelected,
        KeyCode::Backspace => {
            app.selector.pop_char();
            Action::None
        }
        KeyCode::Char(c) => {
            app.selector.push_char(c);
            Action::None
        }
        _ => Action::None,
    }
}
