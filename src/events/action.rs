//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents; keyboard and mouse handlers produce them
//! and `App::dispatch` is the only place that applies them.

use crate::dropdown::DropdownEvent;

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Focus ===
    /// Focus the next dropdown in the row
    FocusNext,
    /// Focus the previous dropdown in the row
    FocusPrev,

    // === Dropdown ===
    /// Notifications emitted by the dropdown at `index`, applied in order.
    /// `pressed` starts the press ripple on it.
    Dropdown {
        index: usize,
        events: Vec<DropdownEvent>,
        pressed: bool,
    },
    /// Move the keyboard highlight of an expanded dropdown down
    HighlightNext(usize),
    /// Move the keyboard highlight of an expanded dropdown up
    HighlightPrev(usize),

    // === Scrolling ===
    /// Scroll the option list of a dropdown by n rows
    ScrollOptions { index: usize, delta: i32 },
    /// Scroll the row of dropdowns by n items
    ScrollRow(i32),

    // === Composite ===
    /// Several actions from one input, applied in order
    Batch(Vec<Action>),

    // === No-op ===
    /// No action to take
    None,
}

impl Action {
    /// Notifications from a dropdown, without a press ripple.
    pub fn dropdown(index: usize, events: Vec<DropdownEvent>) -> Self {
        Action::Dropdown {
            index,
            events,
            pressed: false,
        }
    }

    /// Notifications from a press on a dropdown's surface.
    pub fn dropdown_press(index: usize, events: Vec<DropdownEvent>) -> Self {
        Action::Dropdown {
            index,
            events,
            pressed: true,
        }
    }
}
