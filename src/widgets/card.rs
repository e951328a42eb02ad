//! Widget card rendering.
//!
//! A card is the stateless presentational leaf of the dashboard: a bordered
//! block showing a widget's title and content. While editing, the title
//! carries a remove affordance; removal itself is invoked by the dashboard,
//! which owns the focused widget id.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::WidgetDefinition;

/// Marker appended to the title while editing, signalling that `x` removes
/// the focused widget.
const REMOVE_MARKER: &str = " [x]";

/// Renders one widget card into the given area.
///
/// `editing` shows the remove affordance; `focused` highlights the border
/// so move/resize keys have a visible target.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    def: &WidgetDefinition,
    editing: bool,
    focused: bool,
) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title_spans = vec![Span::styled(
        def.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if editing {
        title_spans.push(Span::styled(
            REMOVE_MARKER,
            Style::default().fg(Color::Red),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(title_spans));

    let content = Paragraph::new(Line::from(Span::styled(
        def.content.clone(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(content, area);
}
