//! Footer component renderer.
//!
//! Status line (when there is one) above the centered command hints.

use crate::ui::helpers::{center_padding, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the status line at `row` and the command hints at `row + 1`.
///
/// Hints wider than the terminal are truncated.
///
/// # Returns
///
/// The next available row position (row + 2).
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    if let Some(status) = &footer.status {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.status_fg));
        out.push_str("  ");
        out.push_str(&truncate(status, cols.saturating_sub(2)));
        out.push_str(Theme::reset());
    }

    let help_text = truncate(&footer.keybindings, cols);
    let text_len = text_width(&help_text);
    let padding = center_padding(text_len, cols);

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(padding));
    out.push_str(&help_text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + text_len)));
    out.push_str(Theme::reset());
    row + 2
}
