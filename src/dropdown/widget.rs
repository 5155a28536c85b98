//! The dropdown widget.
//!
//! Rendering happens in two passes so that popups land on top of everything:
//! the screen first draws every header with [`Dropdown::render_header`], then
//! the rest of its content, and finally every open list with
//! [`Dropdown::render_popup`].
//!
//! The widget never changes its inputs. Taps are registered as regions whose
//! actions carry [`DropdownEvent`] notifications for the owner to apply.

use std::time::Instant;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::events::Action;
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion, priority};
use crate::tui::theme::{Theme, blend};

use super::layout::{self, H_PADDING, ICON_GAP, ICON_WIDTH, text_width};
use super::model::{DropdownEvent, DropdownOptions};
use super::state::DropdownState;

pub const ARROW_DOWN: &str = "▼";
pub const ARROW_UP: &str = "▲";

/// Visual styling of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownStyle {
    pub surface: Color,
    pub text: Color,
    pub border: Color,
    /// Border when focused, selected option
    pub accent: Color,
    /// Keyboard highlight background
    pub highlight: Color,
    /// Press ripple colour
    pub ripple: Color,
}

impl DropdownStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            surface: theme.surface,
            text: theme.on_surface,
            border: theme.outline_variant,
            accent: theme.primary,
            highlight: theme.highlight,
            ripple: theme.ripple,
        }
    }
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// A dropdown selector bound to one value holder.
pub struct Dropdown<'a> {
    index: usize,
    holder: &'a DropdownOptions,
    style: DropdownStyle,
    focused: bool,
}

impl<'a> Dropdown<'a> {
    /// `index` identifies the dropdown in the actions it registers.
    pub fn new(index: usize, holder: &'a DropdownOptions) -> Self {
        Self {
            index,
            holder,
            style: DropdownStyle::default(),
            focused: false,
        }
    }

    pub fn style(mut self, style: DropdownStyle) -> Self {
        self.style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Draw the collapsed header into `slot` and register its tap region.
    pub fn render_header(
        &self,
        frame: &mut Frame,
        slot: Rect,
        state: &DropdownState,
        registry: &mut InteractionRegistry,
        now: Instant,
    ) {
        let area = slot.intersection(frame.area());
        if area.is_empty() {
            return;
        }

        let block = self.surface_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !inner.is_empty() {
            let row = Rect::new(inner.x, inner.y, inner.width, 1);
            self.render_header_row(frame.buffer_mut(), row, state, now);
        }

        registry.register(InteractiveRegion::clickable(
            "dropdown_header",
            area,
            Action::dropdown_press(self.index, DropdownEvent::toggle(self.holder.expanded)),
        ));
    }

    /// Draw the option list over everything else, if it is visible.
    ///
    /// The popup stays on screen while the collapse animation runs. It is as
    /// wide as its widest row, its height follows the height animation, and
    /// it is clipped to the frame.
    pub fn render_popup(
        &self,
        frame: &mut Frame,
        slot: Rect,
        state: &mut DropdownState,
        registry: &mut InteractionRegistry,
        now: Instant,
    ) {
        if !state.options_visible(now) {
            return;
        }

        let bounds = frame.area();
        let options = &self.holder.options;

        // Full width from the first frame; only the height animates
        let full_width = layout::full_width(&self.holder.selected, options);
        let width = state.slot_width(now).max(full_width);
        let height = layout::outer_height(state.content_rows(now));
        let popup = layout::popup_rect(slot, width, height, bounds);
        if popup.is_empty() {
            return;
        }

        // A tap anywhere else asks the popup to close, and still reaches
        // whatever is under it
        if self.holder.expanded {
            registry.register(
                InteractiveRegion::clickable(
                    "dropdown_dismiss",
                    bounds,
                    Action::dropdown(self.index, DropdownEvent::dismiss()),
                )
                .with_priority(priority::DISMISS)
                .with_pass_through(),
            );
        }
        registry.register(
            InteractiveRegion::clickable("dropdown_popup", popup, Action::None)
                .with_priority(priority::POPUP),
        );

        frame.render_widget(Clear, popup);
        let block = self.surface_block();
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        if inner.is_empty() {
            return;
        }

        // Header row, same as the collapsed header
        let header = Rect::new(inner.x, inner.y, inner.width, 1);
        self.render_header_row(frame.buffer_mut(), header, state, now);
        registry.register(
            InteractiveRegion::clickable(
                "dropdown_popup_header",
                Rect::new(popup.x, popup.y, popup.width, header.bottom() - popup.y),
                Action::dropdown_press(self.index, DropdownEvent::toggle(self.holder.expanded)),
            )
            .with_priority(priority::POPUP_ROW),
        );

        let divider_y = inner.y + 1;
        if divider_y < inner.bottom() {
            self.render_divider(frame.buffer_mut(), popup, divider_y);
        }

        // Options
        let list = Rect::new(
            inner.x,
            inner.y.saturating_add(2),
            inner.width,
            inner.height.saturating_sub(2),
        );
        let full_height = layout::outer_height(layout::expanded_rows(options.len()));
        let available = bounds.bottom().saturating_sub(popup.y);
        let viewport = usize::from(full_height.min(available).saturating_sub(4));
        state.set_list_bounds(options.len(), viewport);

        let selected = self.holder.selected_index();
        let range = state.scroll.range();
        for (row, idx) in range.clone().enumerate() {
            let y = list.y + row as u16;
            if y >= list.bottom() {
                break;
            }
            let option = &options[idx];

            let mut text_style = Style::new().fg(self.style.text);
            if Some(idx) == selected {
                text_style = text_style.fg(self.style.accent).add_modifier(Modifier::BOLD);
            }
            let bg = if self.holder.expanded && idx == state.highlighted() {
                self.style.highlight
            } else {
                self.style.surface
            };

            let row_area = Rect::new(list.x, y, list.width, 1);
            let buf = frame.buffer_mut();
            buf.set_style(row_area, Style::new().bg(bg));
            buf.set_line(row_area.x, y, &option_line(option, row_area.width, text_style), row_area.width);

            registry.register(
                InteractiveRegion::clickable(
                    "dropdown_option",
                    Rect::new(popup.x, y, popup.width, 1),
                    Action::dropdown_press(self.index, DropdownEvent::pick(option)),
                )
                .with_priority(priority::POPUP_ROW),
            );
        }

        if !list.is_empty() {
            if state.scroll.is_scrollable() {
                let hint_style = Style::new().fg(self.border_color()).bg(self.style.surface);
                let hint_x = popup.right() - 1;
                let buf = frame.buffer_mut();
                if state.scroll.offset() > 0 {
                    buf.set_string(hint_x, list.y, "↑", hint_style);
                }
                if range.end < options.len() {
                    buf.set_string(hint_x, list.bottom() - 1, "↓", hint_style);
                }
            }

            registry.register(
                InteractiveRegion::scrollable(
                    "dropdown_options",
                    list,
                    Action::ScrollOptions { index: self.index, delta: -1 },
                    Action::ScrollOptions { index: self.index, delta: 1 },
                )
                .with_priority(priority::POPUP_ROW),
            );
        }
    }

    fn border_color(&self) -> Color {
        if self.focused { self.style.accent } else { self.style.border }
    }

    fn surface_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(self.border_color()))
            .style(Style::new().bg(self.style.surface).fg(self.style.text))
    }

    fn render_header_row(&self, buf: &mut Buffer, row: Rect, state: &DropdownState, now: Instant) {
        let line = header_line(
            &self.holder.selected,
            state.progress(now),
            row.width,
            Style::new().fg(self.style.text),
        );
        buf.set_line(row.x, row.y, &line, row.width);

        if let Some(strength) = state.ripple_strength(now) {
            let bg = blend(self.style.surface, self.style.ripple, strength);
            buf.set_style(row, Style::new().bg(bg));
        }
    }

    fn render_divider(&self, buf: &mut Buffer, popup: Rect, y: u16) {
        let style = Style::new().fg(self.border_color()).bg(self.style.surface);
        buf.set_string(popup.x, y, "├", style);
        let inner_width = popup.width.saturating_sub(2);
        buf.set_string(popup.x + 1, y, "─".repeat(usize::from(inner_width)), style);
        if popup.width > 1 {
            buf.set_string(popup.right() - 1, y, "┤", style);
        }
    }
}

/// Arrow for the current expand progress: it turns over halfway through.
pub fn arrow(progress: f32) -> &'static str {
    if progress < 0.5 { ARROW_DOWN } else { ARROW_UP }
}

/// The selected label on the left, the arrow pinned to the right edge.
fn header_line(selected: &str, progress: f32, width: u16, text_style: Style) -> Line<'static> {
    let pad = " ".repeat(usize::from(H_PADDING));
    let content = width.saturating_sub(2 * H_PADDING);
    let label = truncate(selected, content.saturating_sub(ICON_GAP + ICON_WIDTH));
    let gap = content.saturating_sub(text_width(&label) + ICON_WIDTH);

    Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(label, text_style),
        Span::raw(" ".repeat(usize::from(gap))),
        Span::styled(arrow(progress), text_style),
        Span::raw(pad),
    ])
}

fn option_line(option: &str, width: u16, text_style: Style) -> Line<'static> {
    let pad = " ".repeat(usize::from(H_PADDING));
    let label = truncate(option, width.saturating_sub(2 * H_PADDING));
    Line::from(vec![Span::raw(pad), Span::styled(label, text_style)])
}

/// Cut `text` to at most `max` cells of display width.
fn truncate(text: &str, max: u16) -> String {
    let mut out = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let w = text_width(c.encode_utf8(&mut buf));
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown::AnimationSpec;
    use ratatui::{Terminal, backend::TestBackend};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    /// Render one dropdown at the top-left corner of a `width`x`height` frame.
    fn render(
        holder: &DropdownOptions,
        state: &mut DropdownState,
        registry: &mut InteractionRegistry,
        width: u16,
        height: u16,
        now: Instant,
    ) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        state.sync(holder, now, &AnimationSpec::disabled());
        registry.clear();
        terminal
            .draw(|frame| {
                let slot = Rect::new(0, 0, state.slot_width(now), layout::collapsed_height());
                let dropdown = Dropdown::new(0, holder);
                dropdown.render_header(frame, slot, state, registry, now);
                dropdown.render_popup(frame, slot, state, registry, now);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("Option 1", 3), "Opt");
        assert_eq!(truncate("日本語", 5), "日本");
        assert_eq!(truncate("a", 10), "a");
    }

    #[test]
    fn test_header_line_pins_arrow_right() {
        let line = header_line("Opt 2", 0.0, 12, Style::new());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Opt 2    ▼ ");
        assert_eq!(line.width(), 12);

        let line = header_line("Opt 2", 1.0, 12, Style::new());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.ends_with("▲ "));
    }

    #[test]
    fn test_collapsed_renders_header_only() {
        let now = Instant::now();
        let holder = DropdownOptions::default();
        let mut state = DropdownState::default();
        let mut registry = InteractionRegistry::new();
        let buf = render(&holder, &mut state, &mut registry, 30, 12, now);

        assert_eq!(row_text(&buf, 0).trim_end(), "╭────────────╮");
        assert_eq!(row_text(&buf, 1).trim_end(), "│ Option 1 ▼ │");
        assert_eq!(row_text(&buf, 2).trim_end(), "╰────────────╯");
        assert!(row_text(&buf, 3).trim().is_empty());

        assert_eq!(
            registry.handle_click(3, 1),
            Action::dropdown_press(0, vec![DropdownEvent::ExpandedChanged(true)])
        );
        assert_eq!(registry.handle_click(20, 8), Action::None);
    }

    #[test]
    fn test_expanded_renders_options_and_divider() {
        let now = Instant::now();
        let mut holder = DropdownOptions::default();
        holder.expanded = true;
        let mut state = DropdownState::default();
        let mut registry = InteractionRegistry::new();
        let buf = render(&holder, &mut state, &mut registry, 30, 12, now);

        // Widest row is "OptionOption 3": 14 + padding + borders
        assert_eq!(row_text(&buf, 0).trim_end(), "╭────────────────╮");
        assert_eq!(row_text(&buf, 1).trim_end(), "│ Option 1     ▲ │");
        assert_eq!(row_text(&buf, 2).trim_end(), "├────────────────┤");
        assert_eq!(row_text(&buf, 3).trim_end(), "│ Option 1       │");
        assert_eq!(row_text(&buf, 5).trim_end(), "│ OptionOption 3 │");
        assert_eq!(row_text(&buf, 7).trim_end(), "│ aaaaaaaaaaa    │");
        assert_eq!(row_text(&buf, 8).trim_end(), "╰────────────────╯");
    }

    #[test]
    fn test_expanded_click_routing() {
        let now = Instant::now();
        let mut holder = DropdownOptions::default();
        holder.expanded = true;
        let mut state = DropdownState::default();
        let mut registry = InteractionRegistry::new();
        render(&holder, &mut state, &mut registry, 30, 12, now);

        // Option row "Opt 2"
        assert_eq!(
            registry.handle_click(4, 4),
            Action::dropdown_press(
                0,
                vec![
                    DropdownEvent::SelectionChanged("Opt 2".to_string()),
                    DropdownEvent::ExpandedChanged(false),
                ]
            )
        );
        // Header row toggles
        assert_eq!(
            registry.handle_click(4, 1),
            Action::dropdown_press(0, vec![DropdownEvent::ExpandedChanged(false)])
        );
        // Divider is part of the popup and swallows the click
        assert_eq!(registry.handle_click(4, 2), Action::None);
        // Outside dismisses
        assert_eq!(
            registry.handle_click(25, 10),
            Action::dropdown(0, vec![DropdownEvent::ExpandedChanged(false)])
        );
    }

    #[test]
    fn test_short_frame_scrolls_options() {
        let now = Instant::now();
        let mut holder = DropdownOptions::default();
        holder.expanded = true;
        let mut state = DropdownState::default();
        let mut registry = InteractionRegistry::new();
        let buf = render(&holder, &mut state, &mut registry, 30, 6, now);

        assert_eq!(state.scroll.range(), 0..2);
        assert!(row_text(&buf, 3).contains("Option 1"));
        assert!(row_text(&buf, 4).contains("Opt 2"));
        assert!(row_text(&buf, 4).contains('↓'));
        assert_eq!(
            registry.handle_scroll_down(4, 4),
            Action::ScrollOptions { index: 0, delta: 1 }
        );

        state.scroll_options(2);
        let buf = render(&holder, &mut state, &mut registry, 30, 6, now);
        assert!(row_text(&buf, 3).contains("OptionOption 3"));
        assert!(row_text(&buf, 3).contains('↑'));
        assert!(row_text(&buf, 4).contains('↓'));
    }

    #[test]
    fn test_unknown_selection_renders_verbatim() {
        let now = Instant::now();
        let mut holder = DropdownOptions::default();
        holder.selected = "Custom".to_string();
        let mut state = DropdownState::default();
        let mut registry = InteractionRegistry::new();
        let buf = render(&holder, &mut state, &mut registry, 30, 6, now);

        assert!(row_text(&buf, 1).contains("Custom"));
    }

    #[test]
    fn test_popup_is_full_width_while_opening() {
        let t0 = Instant::now();
        let mut holder = DropdownOptions::default();
        let mut state = DropdownState::default();
        state.sync(&holder, t0, &AnimationSpec::disabled());

        holder.expanded = true;
        state.sync(&holder, t0, &AnimationSpec::default());
        let during = t0 + std::time::Duration::from_millis(16);
        assert!(state.progress(during) < 1.0);
        assert!(state.slot_width(during) < 18);

        let mut registry = InteractionRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        terminal
            .draw(|frame| {
                let slot = Rect::new(0, 0, state.slot_width(during), 3);
                Dropdown::new(0, &holder).render_popup(frame, slot, &mut state, &mut registry, during);
            })
            .unwrap();

        assert_eq!(row_text(terminal.backend().buffer(), 0).trim_end(), "╭────────────────╮");
    }

    #[test]
    fn test_popup_lingers_while_collapsing() {
        let t0 = Instant::now();
        let spec = AnimationSpec::default();
        let mut holder = DropdownOptions::default();
        holder.expanded = true;
        let mut state = DropdownState::default();
        state.sync(&holder, t0, &AnimationSpec::disabled());

        holder.expanded = false;
        state.sync(&holder, t0, &spec);
        let during = t0 + std::time::Duration::from_millis(20);
        assert!(state.options_visible(during));

        let mut registry = InteractionRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        terminal
            .draw(|frame| {
                let slot = Rect::new(0, 0, state.slot_width(during), 3);
                let dropdown = Dropdown::new(0, &holder);
                dropdown.render_header(frame, slot, &state, &mut registry, during);
                dropdown.render_popup(frame, slot, &mut state, &mut registry, during);
            })
            .unwrap();

        // Still drawn, but no longer dismissable from outside
        assert!(row_text(terminal.backend().buffer(), 2).contains('├'));
        assert_eq!(registry.handle_click(28, 11), Action::None);
    }
}
