//! Intrinsic measurement of the dropdown, in terminal cells.
//!
//! Header row:  `│ <selected> ▼ │`
//! Option row:  `│ <option>     │`

use ratatui::layout::Rect;
use ratatui::text::Span;

/// Width of a dropdown before its content has been measured.
pub const DEFAULT_WIDTH: u16 = 16;

/// Left and right border.
pub const BORDERS: u16 = 2;

/// Horizontal padding inside the border, per side.
pub const H_PADDING: u16 = 1;

/// Cells taken by the arrow icon.
pub const ICON_WIDTH: u16 = 1;

/// Minimum gap between the selected label and the arrow.
pub const ICON_GAP: u16 = 1;

/// Display width of a label.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// Intrinsic width of the collapsed header showing `selected`.
pub fn header_width(selected: &str) -> u16 {
    BORDERS + 2 * H_PADDING + text_width(selected) + ICON_GAP + ICON_WIDTH
}

/// Intrinsic width of the widest option row.
pub fn options_width(options: &[String]) -> u16 {
    let widest = options.iter().map(|o| text_width(o)).max().unwrap_or(0);
    BORDERS + 2 * H_PADDING + widest
}

/// Intrinsic width of the expanded popup: header and options share one column.
pub fn full_width(selected: &str, options: &[String]) -> u16 {
    header_width(selected).max(options_width(options))
}

/// Content rows when collapsed (the header only).
pub fn collapsed_rows() -> u16 {
    1
}

/// Content rows when expanded: the header plus one per option.
pub fn expanded_rows(option_count: usize) -> u16 {
    u16::try_from(option_count).unwrap_or(u16::MAX).saturating_add(1)
}

/// Outer height for `rows` content rows. A divider follows the header once
/// anything below it is visible.
pub fn outer_height(rows: u16) -> u16 {
    if rows <= 1 {
        rows + 2
    } else {
        rows + 3
    }
}

/// Height of the collapsed header surface.
pub fn collapsed_height() -> u16 {
    outer_height(collapsed_rows())
}

/// Popup rectangle anchored at the slot's top-left corner, clipped to `bounds`.
pub fn popup_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    Rect::new(anchor.x, anchor.y, width, height).intersection(bounds)
}
