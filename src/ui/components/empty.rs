//! Empty state component renderer.

use crate::ui::helpers::{center_padding, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line empty message starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2).
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = text_width(&empty.message);
    let msg_padding = center_padding(msg_len, cols);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&" ".repeat(msg_padding));
    out.push_str(&empty.message);
    out.push_str(Theme::reset());

    let sub_len = text_width(&empty.subtitle);
    let sub_padding = center_padding(sub_len, cols);

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(sub_padding));
    out.push_str(&empty.subtitle);
    out.push_str(Theme::reset());

    row + 2
}
