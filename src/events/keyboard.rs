//! Keyboard event handling.
//!
//! Keys act on the focused dropdown. While it is expanded the arrow keys move
//! the highlight through its options instead of collapsing it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::dropdown::{DropdownEvent, DropdownOptions};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    let index = app.focused;
    match app.focused_dropdown() {
        Some(holder) if holder.expanded => handle_expanded(app, index, holder, key),
        Some(_) => handle_collapsed(index, key),
        None => match key.code {
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        },
    }
}

fn handle_collapsed(index: usize, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,

        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,

        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('j') => {
            Action::dropdown_press(index, DropdownEvent::toggle(false))
        }

        _ => Action::None,
    }
}

fn handle_expanded(app: &App, index: usize, holder: &DropdownOptions, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::dropdown(index, DropdownEvent::dismiss()),

        KeyCode::Down | KeyCode::Char('j') => Action::HighlightNext(index),
        KeyCode::Up | KeyCode::Char('k') => Action::HighlightPrev(index),

        KeyCode::Enter | KeyCode::Char(' ') => {
            let highlighted = app
                .dropdown_states
                .get(index)
                .map(|s| s.highlighted())
                .unwrap_or(0);
            holder
                .options
                .get(highlighted)
                .map(|option| Action::dropdown_press(index, DropdownEvent::pick(option)))
                .unwrap_or(Action::None)
        }

        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,

        _ => Action::None,
    }
}
