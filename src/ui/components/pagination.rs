//! Previous / page / next controls.

use crate::ui::helpers::{center_padding, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the centered page controls at `row`; disabled directions are dimmed.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_pagination(out: &mut String, row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let prev = "◀ prev (p)";
    let page = format!("   Page {}   ", info.page);
    let next = "(n) next ▶";
    let width = text_width(prev) + text_width(&page) + text_width(next);

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(center_padding(width, cols)));
    push_control(out, prev, info.can_prev, theme);
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&page);
    push_control(out, next, info.can_next, theme);
    out.push_str(Theme::reset());

    row + 1
}

fn push_control(out: &mut String, label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    } else {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(label);
    out.push_str(Theme::reset());
}
