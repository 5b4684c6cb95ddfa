//! Composable UI component renderers.
//!
//! Each component writes one part of the screen into the frame buffer at a
//! given row and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar and tab strip
//! - [`filters`]: Rating and language selectors
//! - [`search`]: Search input box
//! - [`grid`]: Numbered result entries
//! - [`pagination`]: Previous / next controls
//! - [`empty`]: Empty state message
//! - [`footer`]: Status line and command hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header + Tabs]
//! [Border]
//! [Filters]        Trending only
//! [Search Bar]     Trending only
//! [Grid | Loading | Empty state]
//! [Pagination]     Trending, loaded, non-empty
//! [Border]
//! [Status]
//! [Footer]
//! ```

mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod pagination;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridViewModel;

use empty::render_empty_state;
use filters::render_filter_bar;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;

/// Rows taken by the border, status line and hints at the bottom.
const FOOTER_ROWS: usize = 3;

/// Renders a horizontal border line at `row`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

fn render_loading(out: &mut String, row: usize, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("  Loading...");
    out.push_str(Theme::reset());
    row + 1
}

/// Lays out every section of the view model into `out`.
pub fn render_layout(out: &mut String, vm: &GridViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    if let Some(filters) = &vm.filters {
        current_row = render_filter_bar(out, current_row, filters, theme);
    }
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(out, current_row, search, theme, cols);
    }

    let footer_start = rows.saturating_sub(FOOTER_ROWS - 1).max(current_row + 1);
    let pagination_rows = usize::from(vm.pagination.is_some());
    let grid_rows = footer_start
        .saturating_sub(1)
        .saturating_sub(current_row)
        .saturating_sub(pagination_rows);

    if vm.loading {
        current_row = render_loading(out, current_row, theme);
    }

    if let Some(empty) = &vm.empty_state {
        current_row = render_empty_state(out, current_row + 1, empty, theme, cols);
    } else {
        current_row = render_grid(out, current_row, &vm.entries, theme, cols, grid_rows);
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(out, current_row, pagination, theme, cols);
    }

    let border_row = footer_start.saturating_sub(1);
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_start, &vm.footer, theme, cols);
}
