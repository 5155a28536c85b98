//! Row of dropdown headers.
//!
//! Items are laid out left to right from the first visible index; only those
//! that fit are drawn. The row scrolls with the mouse wheel or follows focus.

use std::time::Instant;

use ratatui::{Frame, layout::Rect};

use crate::app::App;
use crate::dropdown::{Dropdown, DropdownStyle};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;

/// Blank cells around each dropdown.
pub const ITEM_MARGIN: u16 = 1;

/// Place slots of the given widths left to right, starting at item `first`.
///
/// An item that would cross the right edge ends the row, except for the first
/// one which is always placed (clipped) so something stays visible.
pub fn layout_slots(area: Rect, widths: &[u16], first: usize) -> Vec<(usize, Rect)> {
    let mut slots = vec![];
    let mut x = area.x;

    for (index, &width) in widths.iter().enumerate().skip(first) {
        let left = x.saturating_add(ITEM_MARGIN);
        let right = left.saturating_add(width);
        if right > area.right() {
            if slots.is_empty() && left < area.right() {
                slots.push((index, Rect::new(left, area.y, area.right() - left, area.height)));
            }
            break;
        }
        slots.push((index, Rect::new(left, area.y, width, area.height)));
        x = right.saturating_add(ITEM_MARGIN);
    }

    slots
}

/// Draw the visible headers and return their slots for the popup pass.
pub fn render_dropdown_row(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
) -> Vec<(usize, Rect)> {
    let widths: Vec<u16> = app
        .dropdown_states
        .iter()
        .map(|state| state.slot_width(now))
        .collect();

    let first = app.row_scroll.offset();
    let mut slots = layout_slots(area, &widths, first);
    app.row_scroll.set_bounds(widths.len(), slots.len().max(1));
    if app.row_scroll.offset() != first {
        slots = layout_slots(area, &widths, app.row_scroll.offset());
    }

    app.interactions.register(InteractiveRegion::scrollable(
        "dropdown_row",
        area,
        Action::ScrollRow(-1),
        Action::ScrollRow(1),
    ));

    let style = DropdownStyle::from_theme(&app.theme);
    for &(index, slot) in &slots {
        Dropdown::new(index, &app.dropdowns[index])
            .style(style)
            .focused(index == app.focused)
            .render_header(
                frame,
                slot,
                &app.dropdown_states[index],
                &mut app.interactions,
                now,
            );
    }

    slots
}
