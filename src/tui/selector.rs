//! Widget selector panel.
//!
//! Rendered only while editing: lists the whole catalog, filters by
//! case-insensitive title substring on every keystroke, and marks which
//! widgets are currently on the dashboard. Enter on a row reports an add or
//! remove intent, depending on membership. The filter text and cursor are
//! the only state here; they are never persisted.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::widgets::{WidgetCatalog, WidgetDefinition};

/// Local state of the selector panel: filter text and list cursor.
#[derive(Debug, Default, Clone)]
pub struct SelectorState {
    /// Case-insensitive substring matched against widget titles.
    pub filter: String,
    /// Cursor into the filtered list.
    pub cursor: usize,
}

impl SelectorState {
    /// Creates an empty selector state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character to the filter and resets the cursor.
    pub fn push_char(&mut self, c: char) {
        self.filter.push(c);
        self.cursor = 0;
    }

    /// Removes the last filter character and resets the cursor.
    pub fn pop_char(&mut self) {
        self.filter.pop();
        self.cursor = 0;
    }

    /// Clears filter and cursor.
    pub fn clear(&mut self) {
        self.filter.clear();
        self.cursor = 0;
    }

    /// Moves the cursor up by one, clamped to the first row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down by one, clamped to the last visible row.
    pub fn move_down(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + 1).min(visible_len - 1);
    }

    /// The catalog entries matching the current filter, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a WidgetCatalog) -> Vec<&'a WidgetDefinition> {
        catalog.filter_by_title(&self.filter)
    }

    /// The definition under the cursor, if any rows are visible.
    pub fn selected<'a>(&self, catalog: &'a WidgetCatalog) -> Option<&'a WidgetDefinition> {
        let visible = self.visible(catalog);
        if visible.is_empty() {
            return None;
        }
        let idx = self.cursor.min(visible.len() - 1);
        Some(visible[idx])
    }
}

/// Renders the selector panel: filter line on top, filtered catalog below.
pub fn render_selector(
    frame: &mut Frame,
    area: Rect,
    catalog: &WidgetCatalog,
    active: &[String],
    state: &SelectorState,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Widgets");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let filter_line = Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
        Span::raw(state.filter.clone()),
        Span::styled("▏", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(filter_line), chunks[0]);

    let visible = state.visible(catalog);
    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No widgets match the filter",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|def| {
            let is_active = active.iter().any(|id| *id == def.id);
            let (symbol, style) = if is_active {
                ("● ", Style::default().fg(Color::Green))
            } else {
                ("○ ", Style::default().fg(Color::DarkGray))
            };
            let hint = if is_active { "  (Enter removes)" } else { "  (Enter adds)" };
            ListItem::new(Line::from(vec![
                Span::styled(symbol, style),
                Span::raw(def.title.clone()),
                Span::styled(hint, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor.min(visible.len() - 1)));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
