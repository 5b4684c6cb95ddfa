//! View model types representing renderable UI state.
//!
//! View models are computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel) and
//! consumed by the renderer. They carry display-ready data only; which
//! sections exist (filters, search bar, pagination, empty state) has already
//! been decided.

use crate::app::modes::{Language, Rating, ViewTab};

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewModel {
    pub header: HeaderInfo,

    /// Filter selectors, present in the Trending view only.
    pub filters: Option<FilterBarInfo>,

    /// Search input, present in the Trending view only.
    pub search_bar: Option<SearchBarInfo>,

    /// Display records of the active collection, in order.
    pub entries: Vec<DisplayEntry>,

    /// A fetch or search for the latest request is in flight.
    pub loading: bool,

    /// Message shown instead of the grid when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Page controls, present only in Trending when not loading and non-empty.
    pub pagination: Option<PaginationInfo>,

    pub footer: FooterInfo,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    /// One-based position used by per-item commands.
    pub position: usize,
    pub id: String,
    pub title: String,
    pub display_url: String,
    pub original_url: String,
    pub is_favorited: bool,
    /// The item was favorited within the last moment.
    pub is_animating: bool,
}

/// A navigation tab in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub tab: ViewTab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub rating: Rating,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page: u32,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Footer with command hints and the last status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
    pub status: Option<String>,
}
