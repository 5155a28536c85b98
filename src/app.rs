use std::time::Instant;

use crate::config::Config;
use crate::dropdown::{AnimationSpec, DropdownEvent, DropdownOptions, DropdownState};
use crate::events::Action;
use crate::log;
use crate::scroll::ListScroll;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::Theme;

/// Body text shown below the dropdowns unless the config provides one.
pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

pub struct App {
    /// Value holders, one per dropdown, left to right
    pub dropdowns: Vec<DropdownOptions>,
    /// UI state remembered for each dropdown (same order as `dropdowns`)
    pub dropdown_states: Vec<DropdownState>,
    /// Dropdown receiving keyboard input
    pub focused: usize,
    /// First visible dropdown in the row
    pub row_scroll: ListScroll,
    /// Mouse regions, rebuilt on every render
    pub interactions: InteractionRegistry,
    pub theme: Theme,
    pub animation: AnimationSpec,
    pub body_text: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let dropdowns = config.dropdowns();
        let dropdown_states = vec![DropdownState::default(); dropdowns.len()];
        Self {
            dropdowns,
            dropdown_states,
            focused: 0,
            row_scroll: ListScroll::default(),
            interactions: InteractionRegistry::new(),
            theme: config.theme(),
            animation: config.animation,
            body_text: config
                .body_text
                .clone()
                .unwrap_or_else(|| LOREM_IPSUM.to_string()),
            should_quit: false,
        }
    }

    /// Retarget every dropdown's animations from its value holder.
    pub fn sync(&mut self, now: Instant) {
        for (holder, state) in self.dropdowns.iter().zip(self.dropdown_states.iter_mut()) {
            state.sync(holder, now, &self.animation);
        }
    }

    /// Whether anything on screen is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.dropdown_states.iter().any(|s| s.is_animating(now))
    }

    pub fn focused_dropdown(&self) -> Option<&DropdownOptions> {
        self.dropdowns.get(self.focused)
    }

    /// Apply an action to the application state.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),
            Action::Dropdown {
                index,
                events,
                pressed,
            } => self.apply_dropdown_events(index, &events, pressed, now),
            Action::HighlightNext(index) => {
                if let Some((holder, state)) = self.dropdown_mut(index) {
                    state.highlight_next(holder.options.len());
                }
            }
            Action::HighlightPrev(index) => {
                if let Some((holder, state)) = self.dropdown_mut(index) {
                    state.highlight_prev(holder.options.len());
                }
            }
            Action::ScrollOptions { index, delta } => {
                if let Some(state) = self.dropdown_states.get_mut(index) {
                    state.scroll_options(delta);
                }
            }
            Action::ScrollRow(delta) => self.row_scroll.scroll_by(delta),
            Action::Batch(actions) => {
                for action in actions {
                    self.dispatch(action, now);
                }
            }
            Action::None => {}
        }
    }

    fn dropdown_mut(&mut self, index: usize) -> Option<(&DropdownOptions, &mut DropdownState)> {
        let holder = self.dropdowns.get(index)?;
        let state = self.dropdown_states.get_mut(index)?;
        Some((holder, state))
    }

    fn apply_dropdown_events(
        &mut self,
        index: usize,
        events: &[DropdownEvent],
        pressed: bool,
        now: Instant,
    ) {
        let Some(holder) = self.dropdowns.get_mut(index) else {
            log::log(&format!("Ignoring events for unknown dropdown #{}", index));
            return;
        };

        for event in events {
            match event {
                DropdownEvent::SelectionChanged(value) => {
                    log::log_event(&format!("dropdown #{} selected {}", index, value));
                }
                DropdownEvent::ExpandedChanged(expanded) => {
                    log::log_event(&format!("dropdown #{} expanded = {}", index, expanded));
                }
            }
            holder.apply(event);
        }

        if pressed {
            if let Some(state) = self.dropdown_states.get_mut(index) {
                state.press(now);
            }
            self.focused = index;
        }
    }

    /// Move keyboard focus along the row, closing the dropdown left behind.
    fn move_focus(&mut self, step: isize) {
        let len = self.dropdowns.len();
        if len == 0 {
            return;
        }

        if let Some(holder) = self.dropdowns.get_mut(self.focused) {
            if holder.expanded {
                holder.apply(&DropdownEvent::ExpandedChanged(false));
            }
        }

        self.focused = (self.focused as isize + step).rem_euclid(len as isize) as usize;
        self.row_scroll.ensure_visible(self.focused);
    }
}
