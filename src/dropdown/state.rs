//! Per-instance UI state of a dropdown that is not part of its value holder.

use std::time::{Duration, Instant};

use crate::scroll::ListScroll;

use super::animation::{AnimationSpec, Animated};
use super::layout::{self, DEFAULT_WIDTH};
use super::model::DropdownOptions;

/// How long the press ripple takes to fade out.
pub const RIPPLE_MS: u64 = 300;

/// Animations, measurement, scroll position, keyboard highlight and press
/// ripple of one dropdown. Lives as long as the dropdown is on screen.
#[derive(Debug, Clone)]
pub struct DropdownState {
    /// 0.0 collapsed .. 1.0 expanded
    expand: Animated,
    /// Content rows of the surface (header + options)
    rows: Animated,
    /// Width of the slot the dropdown occupies in its row
    width: Animated,
    pub(crate) scroll: ListScroll,
    highlighted: usize,
    /// Scroll the highlight into view on the next render
    reveal_highlight: bool,
    ripple: Option<Instant>,
    was_expanded: bool,
}

impl Default for DropdownState {
    fn default() -> Self {
        Self {
            expand: Animated::new(0.0),
            rows: Animated::new(f32::from(layout::collapsed_rows())).with_threshold(0.05),
            width: Animated::new(f32::from(DEFAULT_WIDTH)).with_threshold(0.05),
            scroll: ListScroll::default(),
            highlighted: 0,
            reveal_highlight: false,
            ripple: None,
            was_expanded: false,
        }
    }
}

impl DropdownState {
    /// Retarget the animations from the value holder. Call once per frame
    /// before rendering.
    pub fn sync(&mut self, holder: &DropdownOptions, now: Instant, spec: &AnimationSpec) {
        let expanded = holder.expanded;

        self.expand.animate_to(if expanded { 1.0 } else { 0.0 }, now, spec);

        let rows = if expanded {
            layout::expanded_rows(holder.options.len())
        } else {
            layout::collapsed_rows()
        };
        self.rows.animate_to(f32::from(rows), now, spec);

        // The slot takes the popup's width while expanded
        let measured = if expanded {
            layout::full_width(&holder.selected, &holder.options)
        } else {
            layout::header_width(&holder.selected)
        };
        self.width.animate_to(f32::from(measured), now, spec);

        if expanded && !self.was_expanded {
            self.highlighted = holder.selected_index().unwrap_or(0);
            self.scroll.reset();
            self.reveal_highlight = true;
        }
        self.was_expanded = expanded;
    }

    /// Expand animation value, 0.0 ..= 1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        self.expand.value(now).clamp(0.0, 1.0)
    }

    /// The option list stays on screen until the collapse animation ends.
    pub fn options_visible(&self, now: Instant) -> bool {
        self.progress(now) != 0.0
    }

    /// Current slot width in cells.
    pub fn slot_width(&self, now: Instant) -> u16 {
        self.width.value(now).round().max(1.0) as u16
    }

    /// Current number of content rows shown by the surface.
    pub fn content_rows(&self, now: Instant) -> u16 {
        self.rows.value(now).round().max(1.0) as u16
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.expand.is_running(now)
            || self.rows.is_running(now)
            || self.width.is_running(now)
            || self.ripple_strength(now).is_some()
    }

    /// Start a press ripple.
    pub fn press(&mut self, now: Instant) {
        self.ripple = Some(now);
    }

    /// Remaining ripple intensity, 1.0 right after the press down to 0.0.
    pub fn ripple_strength(&self, now: Instant) -> Option<f32> {
        let pressed = self.ripple?;
        let elapsed = now.saturating_duration_since(pressed);
        let total = Duration::from_millis(RIPPLE_MS);
        if elapsed >= total {
            return None;
        }
        Some(1.0 - elapsed.as_secs_f32() / total.as_secs_f32())
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Move the highlight down (wraps around).
    pub fn highlight_next(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + 1) % len;
            self.scroll.ensure_visible(self.highlighted);
        }
    }

    /// Move the highlight up (wraps around).
    pub fn highlight_prev(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = self.highlighted.checked_sub(1).unwrap_or(len - 1).min(len - 1);
            self.scroll.ensure_visible(self.highlighted);
        }
    }

    /// Scroll the option list by `delta` rows.
    pub fn scroll_options(&mut self, delta: i32) {
        self.scroll.scroll_by(delta);
    }

    /// Update the option list bounds after layout.
    pub(crate) fn set_list_bounds(&mut self, len: usize, viewport: usize) {
        self.scroll.set_bounds(len, viewport);
        if self.reveal_highlight && viewport > 0 {
            self.scroll.ensure_visible(self.highlighted);
            self.reveal_highlight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_width_starts_at_default_and_follows_measurement() {
        let t0 = Instant::now();
        let mut state = DropdownState::default();
        assert_eq!(state.slot_width(t0), DEFAULT_WIDTH);

        let holder = DropdownOptions::default();
        state.sync(&holder, t0, &AnimationSpec::default());
        assert!(state.is_animating(t0));
        assert_eq!(state.slot_width(t0 + ms(2000)), layout::header_width("Option 1"));
    }

    #[test]
    fn test_width_grows_to_popup_while_expanded() {
        let t0 = Instant::now();
        let mut state = DropdownState::default();
        let mut holder = DropdownOptions::default();
        state.sync(&holder, t0, &AnimationSpec::disabled());
        assert_eq!(state.slot_width(t0), 14);

        holder.expanded = true;
        state.sync(&holder, t0, &AnimationSpec::default());
        assert_eq!(state.slot_width(t0 + ms(2000)), 18);

        holder.expanded = false;
        state.sync(&holder, t0 + ms(2000), &AnimationSpec::default());
        assert_eq!(state.slot_width(t0 + ms(4000)), 14);
    }

    #[test]
    fn test_expand_and_collapse_progress() {
        let t0 = Instant::now();
        let spec = AnimationSpec::default();
        let mut state = DropdownState::default();
        let mut holder = DropdownOptions::default();
        state.sync(&holder, t0, &spec);
        assert!(!state.options_visible(t0));

        holder.expanded = true;
        state.sync(&holder, t0, &spec);
        assert!(!state.options_visible(t0));
        assert!(state.options_visible(t0 + ms(16)));

        let open = t0 + ms(2000);
        assert_eq!(state.progress(open), 1.0);
        assert_eq!(state.content_rows(open), 6);

        holder.expanded = false;
        state.sync(&holder, open, &spec);
        assert!(state.options_visible(open + ms(16)));
        assert!(!state.options_visible(open + ms(2000)));
        assert_eq!(state.content_rows(open + ms(2000)), 1);
    }

    #[test]
    fn test_highlight_starts_on_selection_and_wraps() {
        let t0 = Instant::now();
        let mut state = DropdownState::default();
        let mut holder = DropdownOptions::default();
        holder.selected = "a".to_string();
        holder.expanded = true;
        state.sync(&holder, t0, &AnimationSpec::disabled());
        assert_eq!(state.highlighted(), 3);

        state.highlight_next(5);
        assert_eq!(state.highlighted(), 4);
        state.highlight_next(5);
        assert_eq!(state.highlighted(), 0);
        state.highlight_prev(5);
        assert_eq!(state.highlighted(), 4);
    }

    #[test]
    fn test_unknown_selection_highlights_first() {
        let mut state = DropdownState::default();
        let mut holder = DropdownOptions::default();
        holder.selected = "zzz".to_string();
        holder.expanded = true;
        state.sync(&holder, Instant::now(), &AnimationSpec::disabled());
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn test_reveal_highlight_on_first_layout() {
        let mut state = DropdownState::default();
        let mut holder = DropdownOptions::default();
        holder.selected = "aaaaaaaaaaa".to_string();
        holder.expanded = true;
        state.sync(&holder, Instant::now(), &AnimationSpec::disabled());

        state.set_list_bounds(5, 2);
        assert_eq!(state.scroll.range(), 3..5);
    }

    #[test]
    fn test_ripple_fades() {
        let t0 = Instant::now();
        let mut state = DropdownState::default();
        assert!(state.ripple_strength(t0).is_none());

        state.press(t0);
        assert_eq!(state.ripple_strength(t0), Some(1.0));
        let half = state.ripple_strength(t0 + ms(RIPPLE_MS / 2)).unwrap();
        assert!(half > 0.4 && half < 0.6);
        assert!(state.ripple_strength(t0 + ms(RIPPLE_MS)).is_none());
    }
}
