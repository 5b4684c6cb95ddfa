//! Header component renderer.
//!
//! Title bar followed by the tab strip. The active tab is drawn inverted.

use crate::ui::helpers::{center_padding, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and the tab strip starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 2).
///
/// # Layout
///
/// ```text
/// [left padding] GIF Explorer [right padding]
///   Trending   Favorites (2)
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = text_width(&header.title);
    let padding = center_padding(title_len, cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&" ".repeat(padding));
    out.push_str(&header.title);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + title_len)));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str("  ");
    for tab in &header.tabs {
        if tab.active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.tab_active_fg));
            out.push_str(&Theme::bg(&theme.colors.tab_active_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push(' ');
        out.push_str(&tab.label);
        out.push(' ');
        out.push_str(Theme::reset());
        out.push_str("  ");
    }

    row + 2
}
