//! Scroll offset for lists that show a window of their items.
//!
//! Used by the dropdown's option list (rows) and by the home screen's row of
//! dropdowns (items). The length and viewport are refreshed on every render,
//! so the offset is re-clamped whenever the content or the space changes.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut scroll = ListScroll::default();
//!
//! // During render:
//! scroll.set_bounds(items.len(), visible_rows);
//! let visible = &items[scroll.range()];
//!
//! // On mouse wheel:
//! scroll.scroll_by(-1);
//! ```

use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScroll {
    /// Index of the first visible item
    offset: usize,
    /// Total number of items
    len: usize,
    /// Number of items that fit
    viewport: usize,
}

impl ListScroll {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.viewport)
    }

    /// Whether some items are hidden.
    pub fn is_scrollable(&self) -> bool {
        self.len > self.viewport
    }

    /// Update content length and viewport size, clamping the offset.
    pub fn set_bounds(&mut self, len: usize, viewport: usize) {
        self.len = len;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Move the window by `delta` items (negative = towards the start).
    pub fn scroll_by(&mut self, delta: i32) {
        let magnitude = delta.unsigned_abs() as usize;
        self.offset = if delta < 0 {
            self.offset.saturating_sub(magnitude)
        } else {
            self.offset.saturating_add(magnitude).min(self.max_offset())
        };
    }

    /// Scroll the minimum amount that makes `index` visible.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.viewport == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Reset to the start.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Indices of the visible items.
    pub fn range(&self) -> Range<usize> {
        self.offset..(self.offset + self.viewport).min(self.len)
    }
}
