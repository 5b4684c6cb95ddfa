//! Rating and language selector row.

use crate::app::modes::{Language, Rating};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders both selectors on one line, the current value of each highlighted.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_filter_bar(out: &mut String, row: usize, filters: &FilterBarInfo, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str("  ");
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str("Rating:");
    for rating in Rating::ALL {
        push_option(out, rating.label(), rating == filters.rating, theme);
    }

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str("   Language:");
    for language in Language::ALL {
        push_option(out, language.label(), language == filters.language, theme);
    }
    out.push_str(Theme::reset());

    row + 1
}

fn push_option(out: &mut String, label: &str, selected: bool, theme: &Theme) {
    out.push(' ');
    if selected {
        out.push_str(&Theme::fg(&theme.colors.tab_active_fg));
        out.push_str(&Theme::bg(&theme.colors.tab_active_bg));
        out.push_str(label);
        out.push_str(Theme::reset());
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(label);
    }
}
