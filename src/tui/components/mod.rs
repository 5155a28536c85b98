//! Home screen components.
//!
//! - `dropdown_row` - the row of dropdown headers, scrolled lazily
//! - `body_text` - wrapped paragraph below the row
//! - `hotkeys` - key hints on the bottom line

mod body_text;
mod dropdown_row;
mod hotkeys;

pub use body_text::render_body_text;
pub use dropdown_row::render_dropdown_row;
pub use hotkeys::render_hotkeys;

use crate::dropdown::layout::text_width;

/// Wrap text to fit within `width` cells, breaking at spaces.
///
/// Words wider than a line are split at cell boundaries. Newlines in the
/// input start a new line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = vec![];
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_width = usize::from(text_width(word));

            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            while word_width > width {
                let (head, tail) = split_at_width(word, width);
                if head.is_empty() {
                    // A single character wider than the line
                    break;
                }
                lines.push(head.to_string());
                word = tail;
                word_width = usize::from(text_width(word));
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}

/// Split `s` so the head is at most `max_width` cells wide.
fn split_at_width(s: &str, max_width: usize) -> (&str, &str) {
    let mut used = 0;
    for (byte, ch) in s.char_indices() {
        let w = usize::from(text_width(ch.encode_utf8(&mut [0; 4])));
        if used + w > max_width {
            return s.split_at(byte);
        }
        used += w;
    }
    (s, "")
}
