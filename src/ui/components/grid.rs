//! Result grid renderer.
//!
//! The terminal stand-in for the image grid: one numbered row per entry with
//! its title and display URL. Favorited entries carry a heart; an entry that
//! was just favorited is drawn with the marker highlight. Entries that do
//! not fit are summarised on a final "more" row.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayEntry;

/// Width reserved for the title column.
const TITLE_WIDTH: usize = 40;

/// Renders entries starting at `row` within `max_rows` rows.
///
/// When the entries do not fit, the last row becomes a marker counting the
/// hidden ones, so nothing is dropped silently.
///
/// # Returns
///
/// The next available row position.
pub fn render_grid(
    out: &mut String,
    row: usize,
    entries: &[DisplayEntry],
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    if max_rows == 0 {
        return row;
    }
    let overflows = entries.len() > max_rows;
    let shown = if overflows { max_rows.saturating_sub(1) } else { entries.len() };

    let mut current_row = row;
    for entry in &entries[..shown] {
        current_row = render_entry(out, current_row, entry, theme, cols);
    }

    if overflows {
        current_row = render_more(out, current_row, entries.len() - shown, theme, cols);
    }
    current_row
}

fn render_more(out: &mut String, row: usize, hidden: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&truncate(&format!("  … {hidden} more (enlarge the terminal to see them)"), cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a single entry.
///
/// # Layout
///
/// ```text
///  12. ♥ title (up to 40 chars)    https://media.example/.../200.gif
/// ```
fn render_entry(out: &mut String, row: usize, entry: &DisplayEntry, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let number = format!("{:>3}. ", entry.position);
    let title = if entry.title.trim().is_empty() {
        entry.id.clone()
    } else {
        truncate(&entry.title, TITLE_WIDTH)
    };

    if entry.is_animating {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.marker_fg));
        out.push_str(&Theme::bg(&theme.colors.marker_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&number);

    if entry.is_favorited {
        if !entry.is_animating {
            out.push_str(&Theme::fg(&theme.colors.favorite_fg));
        }
        out.push('♥');
        if !entry.is_animating {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }
    } else {
        out.push(' ');
    }
    out.push(' ');

    out.push_str(&title);
    out.push_str(&" ".repeat(TITLE_WIDTH.saturating_sub(text_width(&title)) + 2));

    let used = text_width(&number) + 2 + TITLE_WIDTH + 2;
    if !entry.is_animating {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&truncate(&entry.display_url, cols.saturating_sub(used)));
    out.push_str(Theme::reset());

    row + 1
}
