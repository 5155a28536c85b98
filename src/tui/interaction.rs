//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the highest-priority region under the pointer.
//! Popups register above everything else, and an expanded dropdown also
//! registers a frame-sized region just below its popup so that a click
//! anywhere else dismisses it. That region passes the click through: the
//! control under the pointer receives it as well.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(
//!     InteractiveRegion::clickable("dropdown_header", area, action)
//!         .with_priority(priority::POPUP),
//! );
//!
//! // Mouse events are dispatched to matching regions
//! let action = registry.handle_click(x, y);
//! ```

use ratatui::layout::{Position, Rect};

use crate::events::Action;

/// Priorities for overlapping regions (higher = checked first).
pub mod priority {
    /// Ordinary screen content
    pub const CONTENT: i32 = 0;
    /// Frame-sized region catching clicks outside an open popup
    pub const DISMISS: i32 = 100;
    /// The popup surface itself (borders, divider)
    pub const POPUP: i32 = 101;
    /// Rows inside the popup
    pub const POPUP_ROW: i32 = 102;
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: Rect,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,

    /// Clicks also reach the next region below this one
    pub pass_through: bool,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: Rect, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: priority::CONTENT,
            pass_through: false,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(id: &'static str, bounds: Rect, scroll_up: Action, scroll_down: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: priority::CONTENT,
            pass_through: false,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Let clicks continue to the region below after this one handles them
    pub fn with_pass_through(mut self) -> Self {
        self.pass_through = true;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(Position::new(x, y))
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Topmost region under (x, y) that handles the event selected by `handler`.
    ///
    /// Among equal priorities the region registered last wins, since it was
    /// drawn on top.
    fn topmost<F>(&self, x: u16, y: u16, handler: F) -> Option<&InteractiveRegion>
    where
        F: Fn(&InteractiveRegion) -> bool,
    {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(x, y) && handler(r))
            .max_by_key(|(order, r)| (r.priority, *order))
            .map(|(_, r)| r)
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Pass-through regions contribute their action and let the click fall to
    /// the next region below, until one that stops it. Several actions are
    /// returned as an [`Action::Batch`], topmost first.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        let mut hits: Vec<(usize, &InteractiveRegion)> = self
            .regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(x, y) && r.on_click.is_some())
            .collect();
        hits.sort_by_key(|(order, r)| std::cmp::Reverse((r.priority, *order)));

        let mut actions = vec![];
        for (_, region) in hits {
            if let Some(action) = region.on_click.clone() {
                if action != Action::None {
                    actions.push(action);
                }
            }
            if !region.pass_through {
                break;
            }
        }

        match actions.len() {
            0 => Action::None,
            1 => actions.remove(0),
            _ => Action::Batch(actions),
        }
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.topmost(x, y, |r| r.on_scroll_up.is_some())
            .and_then(|r| r.on_scroll_up.clone())
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.topmost(x, y, |r| r.on_scroll_down.is_some())
            .and_then(|r| r.on_scroll_down.clone())
            .unwrap_or(Action::None)
    }

    /// Id of the region a click at (x, y) would hit, for logging.
    pub fn click_target(&self, x: u16, y: u16) -> Option<&'static str> {
        self.topmost(x, y, |r| r.on_click.is_some()).map(|r| r.id)
    }
}
