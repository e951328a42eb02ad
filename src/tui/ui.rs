//! Main rendering orchestration for the TUI dashboard.
//!
//! Composes the header, the edit-mode selector panel, the widget grid, and
//! the keybinding footer. Grid units are scaled to terminal cells here: one
//! grid row is one terminal row, columns are divided evenly across the grid
//! area. The breakpoint is re-selected from the terminal width on every
//! render and recorded on the app so move/resize keys target the layout the
//! user is looking at.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

use crate::layout::Y_BOTTOM;
use crate::tui::app::{App, Panel};
use crate::tui::selector::render_selector;
use crate::widgets::card::render_card;

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "Gridboard";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Height of the selector panel while editing.
const SELECTOR_PANEL_HEIGHT: u16 = 10;

/// Footer text per mode.
const FOOTER_VIEW: &str = "[e] Edit  [j/k] Focus  [q] Quit";
const FOOTER_EDIT_GRID: &str =
    "[hjkl/arrows] Move  [HJKL] Resize  [x] Remove  [Tab] Widgets  [s] Save  [Esc] Cancel";
const FOOTER_EDIT_SELECTOR: &str =
    "[type] Filter  [Up/Down] Select  [Enter] Add/Remove  [Tab/Esc] Back";

/// Renders the full dashboard: header, selector panel (edit mode only),
/// widget grid, and footer.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let editing = app.state.editing();

    let chunks: Vec<Rect> = if editing {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(SELECTOR_PANEL_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    };

    render_header(frame, chunks[0], editing);

    let (grid_area, footer_area) = if editing {
        render_selector(
            frame,
            chunks[1],
            &app.catalog,
            app.state.visible_ids(),
            &app.selector,
            app.panel == Panel::Selector,
        );
        (chunks[2], chunks[3])
    } else {
        (chunks[1], chunks[2])
    };

    render_grid(frame, grid_area, app);
    render_footer(frame, footer_area, app);
}

/// Header with title (left), edit indicator, and version (right-aligned).
fn render_header(frame: &mut Frame, area: Rect, editing: bool) {
    let mode_text = if editing { " (EDITING)" } else { "" };
    let title_len = HEADER_TEXT.len() + mode_text.len();
    let padding_len = (area.width as usize)
        .saturating_sub(title_len)
        .saturating_sub(VERSION_TEXT.len());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(Color::Cyan)),
        Span::styled(mode_text, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(VERSION_TEXT, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Renders the widget grid for the breakpoint matching the area width.
fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let bp = app.grid_config.breakpoint_for(area.width);
    app.current_breakpoint = bp;
    let cols = app.grid_config.cols(bp);
    let editing = app.state.editing();

    let ids = app.state.visible_ids().to_vec();
    if ids.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "No widgets on the dashboard (press e to edit)",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(hint, area);
        return;
    }

    let focused_id = app.focused_id().map(str::to_string);
    for id in &ids {
        let Some(entry) = app.state.visible_layouts().entry(bp, id) else {
            continue;
        };
        if entry.y == Y_BOTTOM || entry.y >= u32::from(area.height) {
            continue;
        }
        let Some(def) = app.catalog.get(id) else {
            continue;
        };

        // Even column split: cell boundaries computed per edge so rounding
        // never leaves gaps between adjacent widgets. Coordinates are
        // clamped to the grid first; persisted entries are untrusted input.
        let x = entry.x.min(cols - 1);
        let w = entry.w.clamp(1, cols - x);
        let x0 = (x * u32::from(area.width) / cols) as u16;
        let x1 = ((x + w) * u32::from(area.width) / cols) as u16;
        let y0 = entry.y as u16;
        let height = entry.h.min(u32::from(area.height - y0)) as u16;
        let rect = Rect::new(area.x + x0, area.y + y0, x1.saturating_sub(x0), height);

        let focused = focused_id.as_deref() == Some(id.as_str());
        render_card(frame, rect, def, editing, focused);
    }
}

/// Footer with keybindings, overridden by a transient status message.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some((msg, expiry)) if Instant::now() < *expiry => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        )),
        _ => {
            let text = if !app.state.editing() {
                FOOTER_VIEW
            } else if app.panel == Panel::Selector {
                FOOTER_EDIT_SELECTOR
            } else {
                FOOTER_EDIT_GRID
            };
            Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
