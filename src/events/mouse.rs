//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by the dropdowns and the home screen during each render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::log;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        // Horizontal wheels move the row of dropdowns wherever the pointer is
        MouseEventKind::ScrollLeft => Action::ScrollRow(-1),
        MouseEventKind::ScrollRight => Action::ScrollRow(1),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = app.interactions.click_target(x, y) {
                log::log_event(&format!("click ({}, {}) -> {}", x, y, id));
            }
            app.interactions.handle_click(x, y)
        }
        _ => Action::None,
    }
}
