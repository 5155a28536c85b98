//! Value holder for a single dropdown and the notifications it emits.

use crate::error::DropdownError;

/// Labels every dropdown on the home screen starts with.
pub const DEFAULT_OPTIONS: [&str; 5] = ["Option 1", "Opt 2", "OptionOption 3", "a", "aaaaaaaaaaa"];

/// Notifications emitted by the dropdown widget.
///
/// The widget never mutates its inputs; the owner applies these to its
/// `DropdownOptions` (see [`DropdownOptions::apply`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The user picked an option
    SelectionChanged(String),
    /// The list should open (`true`) or close (`false`)
    ExpandedChanged(bool),
}

impl DropdownEvent {
    /// Notifications for a tap on the header.
    pub fn toggle(expanded: bool) -> Vec<Self> {
        vec![DropdownEvent::ExpandedChanged(!expanded)]
    }

    /// Notifications for picking `option`: select it, then close the list.
    pub fn pick(option: &str) -> Vec<Self> {
        vec![
            DropdownEvent::SelectionChanged(option.to_string()),
            DropdownEvent::ExpandedChanged(false),
        ]
    }

    /// Notifications for a dismiss request (tap outside, Esc).
    pub fn dismiss() -> Vec<Self> {
        vec![DropdownEvent::ExpandedChanged(false)]
    }
}

/// Per-dropdown value holder: selected label, expanded flag and the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOptions {
    pub selected: String,
    pub expanded: bool,
    pub options: Vec<String>,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            selected: DEFAULT_OPTIONS[0].to_string(),
            expanded: false,
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DropdownOptions {
    pub fn new(options: Vec<String>, selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            expanded: false,
            options,
        }
    }

    pub fn on_value_change(&mut self, value: impl Into<String>) {
        self.selected = value.into();
    }

    pub fn on_expanded_change(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Apply one widget notification.
    pub fn apply(&mut self, event: &DropdownEvent) {
        match event {
            DropdownEvent::SelectionChanged(value) => self.on_value_change(value.clone()),
            DropdownEvent::ExpandedChanged(expanded) => self.on_expanded_change(*expanded),
        }
    }

    /// Index of the selected label in `options`, if it is one of them.
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.selected)
    }

    /// Check that there is something to pick and that `selected` is one of it.
    ///
    /// The widget renders whatever it is given; only configuration loading
    /// calls this.
    pub fn validate(&self) -> Result<(), DropdownError> {
        if self.options.is_empty() {
            return Err(DropdownError::NoOptions);
        }
        if self.selected_index().is_none() {
            return Err(DropdownError::UnknownSelection(self.selected.clone()));
        }
        Ok(())
    }
}
