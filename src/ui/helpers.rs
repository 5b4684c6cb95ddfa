//! Shared rendering utilities.
//!
//! Components write into a [`String`] frame rather than straight to stdout so
//! a whole screen is flushed in one write and can be inspected in tests.
//! Widths are measured in `char`s; escape sequences are never counted.

use std::fmt::Write as _;

/// Moves the cursor to a 1-indexed row and column.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Erases from the cursor to the end of the line.
pub fn clear_line(out: &mut String) {
    out.push_str("\u{1b}[K");
}

/// Visible width of plain text.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` chars, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Left padding that centers `text_len` chars in `cols`.
#[must_use]
pub fn center_padding(text_len: usize, cols: usize) -> usize {
    cols.saturating_sub(text_len) / 2
}
