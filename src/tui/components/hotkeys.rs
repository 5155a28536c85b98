//! Key hints on the bottom line.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

/// Render hints for the current input context.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::new().fg(app.theme.on_background);
    let dim = Style::new().fg(app.theme.text_dim);

    let expanded = app.focused_dropdown().map(|d| d.expanded).unwrap_or(false);
    let hotkeys = if expanded {
        Line::from(vec![
            Span::styled("[j/k]", key),
            Span::styled(" navigate • ", dim),
            Span::styled("[Enter]", key),
            Span::styled(" select • ", dim),
            Span::styled("[Esc]", key),
            Span::styled(" close • ", dim),
            Span::styled("[q]", key),
            Span::styled("uit", dim),
        ])
    } else {
        Line::from(vec![
            Span::styled("[Tab/h/l]", key),
            Span::styled(" focus • ", dim),
            Span::styled("[Enter]", key),
            Span::styled(" open • ", dim),
            Span::styled("[q]", key),
            Span::styled("uit", dim),
        ])
    };

    frame.render_widget(Paragraph::new(hotkeys), area);
}
