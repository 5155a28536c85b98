//! Home screen: a row of dropdowns above a paragraph of text.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use crate::app::App;
use crate::dropdown::{Dropdown, DropdownStyle, layout};

use super::components::{render_body_text, render_dropdown_row, render_hotkeys};

pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    app.sync(now);
    app.interactions.clear();

    let area = frame.area();
    frame.render_widget(
        Block::default().style(
            Style::new()
                .bg(app.theme.background)
                .fg(app.theme.on_background),
        ),
        area,
    );

    // Main vertical layout: padding, dropdowns, text, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(1),                          // Top padding
        Constraint::Length(layout::collapsed_height()), // Dropdown row
        Constraint::Min(0),                             // Body text
        Constraint::Length(1),                          // Hotkeys
    ])
    .split(area);

    let slots = render_dropdown_row(frame, main_layout[1], app, now);
    render_body_text(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3], app);

    // Open lists go last so they cover the text below
    let style = DropdownStyle::from_theme(&app.theme);
    for (index, slot) in slots {
        Dropdown::new(index, &app.dropdowns[index])
            .style(style)
            .focused(index == app.focused)
            .render_popup(
                frame,
                slot,
                &mut app.dropdown_states[index],
                &mut app.interactions,
                now,
            );
    }
}
