//! Paragraph below the dropdown row.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Padding, Paragraph},
};

use crate::app::App;

use super::wrap_text;

/// Render the body text wrapped to the area, with one cell of padding.
pub fn render_body_text(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().padding(Padding::uniform(1));
    let inner = block.inner(area);

    let lines: Vec<Line> = wrap_text(&app.body_text, usize::from(inner.width))
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::new().fg(app.theme.on_background));
    frame.render_widget(paragraph, area);
}
