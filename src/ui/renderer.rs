//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`GridViewModel`] from the state, then
//! lay it out into a single frame string that the shell writes in one go.
//!
//! # Example
//!
//! ```rust
//! use gif_explorer::app::AppState;
//! use gif_explorer::app::filters::FilterState;
//! use gif_explorer::ui::{render, Theme};
//!
//! let state = AppState::new(FilterState::default(), 12);
//! let frame = render(&state, &Theme::default(), 24, 80);
//! assert!(frame.contains("GIF Explorer"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridViewModel;

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders the whole screen for `state` into a frame string.
#[must_use]
pub fn render(state: &AppState, theme: &Theme, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &GridViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::from(CLEAR_SCREEN);
    components::render_layout(&mut out, vm, theme, rows, cols);
    out.push_str(Theme::reset());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filters::FilterState;
    use crate::app::ViewTab;
    use crate::domain::Item;

    fn plain(frame: &str) -> String {
        let mut text = String::new();
        let mut chars = frame.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                text.push(c);
            }
        }
        text
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(FilterState::default(), 12);
        state.results = vec![
            Item::new("a", "Happy cat").with_rendition("fixed_height", "https://m.example/a.gif"),
            Item::new("b", "Sad dog").with_rendition("fixed_height", "https://m.example/b.gif"),
        ];
        state
    }

    fn full_page_state() -> AppState {
        let mut state = AppState::new(FilterState::default(), 12);
        state.results = (1..=12)
            .map(|n| {
                Item::new(format!("id{n}"), format!("Item {n:02}"))
                    .with_rendition("fixed_height", format!("https://m.example/{n}.gif"))
            })
            .collect();
        state
    }

    fn shown_titles(text: &str) -> usize {
        (1..=12).filter(|n| text.contains(&format!("Item {n:02}"))).count()
    }

    #[test]
    fn full_page_fits_a_regular_terminal() {
        let state = full_page_state();
        let text = plain(&render(&state, &Theme::default(), 39, 100));

        assert_eq!(shown_titles(&text), 12);
        assert!(!text.contains(" more ("));
        assert!(text.contains("Page 1"));
    }

    #[test]
    fn entries_that_do_not_fit_are_counted() {
        let state = full_page_state();
        let text = plain(&render(&state, &Theme::default(), 23, 80));

        assert_eq!(shown_titles(&text), 9);
        assert!(text.contains("… 3 more"));
    }

    #[test]
    fn every_entry_is_shown_or_counted_at_any_height() {
        let state = full_page_state();
        for rows in 14..=40 {
            let text = plain(&render(&state, &Theme::default(), rows, 80));
            let hidden = 12 - shown_titles(&text);
            if hidden == 0 {
                assert!(!text.contains(" more ("), "rows {rows}");
            } else {
                assert!(text.contains(&format!("… {hidden} more")), "rows {rows}");
            }
        }
    }

    #[test]
    fn trending_frame_shows_every_section() {
        let mut state = loaded_state();
        state.favorites.toggle(&state.results[1].clone());
        let text = plain(&render(&state, &Theme::default(), 30, 120));

        assert!(text.contains("Trending"));
        assert!(text.contains("Favorites (1)"));
        assert!(text.contains("Rating:"));
        assert!(text.contains("Search:"));
        assert!(text.contains("1.   Happy cat"));
        assert!(text.contains("2. ♥ Sad dog"));
        assert!(text.contains("https://m.example/a.gif"));
        assert!(text.contains("Page 1"));
    }

    #[test]
    fn empty_favorites_frame_has_message_and_no_controls() {
        let mut state = loaded_state();
        state.active_tab = ViewTab::Favorites;
        let text = plain(&render(&state, &Theme::default(), 30, 120));

        assert!(text.contains("No favorite GIFs yet."));
        assert!(!text.contains("Page "));
        assert!(!text.contains("Search:"));
        assert!(!text.contains("Rating:"));
    }

    #[test]
    fn loading_frame_hides_pagination() {
        let mut state = loaded_state();
        state.loading = true;
        let text = plain(&render(&state, &Theme::default(), 30, 120));

        assert!(text.contains("Loading..."));
        assert!(!text.contains("Page 1"));
    }

    #[test]
    fn status_line_is_rendered() {
        let mut state = loaded_state();
        state.status = Some("Failed to fetch trending GIFs (HTTP 502)".to_string());
        let text = plain(&render(&state, &Theme::default(), 30, 120));

        assert!(text.contains("Failed to fetch trending GIFs (HTTP 502)"));
    }
}
