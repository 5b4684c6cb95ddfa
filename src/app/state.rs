//! Application state and grid projection.
//!
//! [`AppState`] is the single source of truth for everything the UI shows: the
//! live result set, favorites, active tab, page, filters, loading flag and the
//! transient animation marker. The event handler mutates it; the renderer only
//! sees the [`GridViewModel`] computed from it.
//!
//! # Request sequencing
//!
//! Each fetch or search is issued with a fresh [`RequestToken`]. The state
//! remembers the latest one, and a response is applied only when its token
//! matches. A slow, superseded request therefore can never overwrite newer
//! results or clear the loading flag of the request that replaced it.
//!
//! # Example
//!
//! ```rust
//! use gif_explorer::app::AppState;
//! use gif_explorer::app::filters::FilterState;
//!
//! let state = AppState::new(FilterState::default(), 12);
//! let viewmodel = state.compute_viewmodel();
//! assert!(viewmodel.entries.is_empty());
//! ```

use super::favorites::FavoritesStore;
use super::filters::FilterState;
use super::modes::ViewTab;
use super::pagination::Pagination;
use crate::client::{SearchParams, TrendingParams};
use crate::domain::Item;
use crate::ui::viewmodel::{
    DisplayEntry, EmptyState, FilterBarInfo, FooterInfo, GridViewModel, HeaderInfo,
    PaginationInfo, SearchBarInfo, TabInfo,
};
use crate::worker::{RequestToken, WorkerMessage};

/// Which endpoint the latest request went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Trending,
    Search,
}

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live result set, replaced wholesale by each accepted response.
    pub results: Vec<Item>,

    /// Current search text.
    pub query: String,

    pub favorites: FavoritesStore,

    pub active_tab: ViewTab,

    /// True while the latest issued request is in flight.
    pub loading: bool,

    pub pagination: Pagination,

    /// Id of the most recently favorited item, cleared shortly after.
    pub animate_id: Option<String>,

    pub filters: FilterState,

    /// Items requested per page.
    pub page_size: u32,

    /// Last user-facing status line (errors, downloads, copies).
    pub status: Option<String>,

    latest_token: Option<RequestToken>,
    latest_kind: Option<RequestKind>,
    issued: u64,
}

impl AppState {
    /// Creates the initial state: Trending view, page 1, nothing loaded yet.
    ///
    /// A zero `page_size` is raised to 1.
    #[must_use]
    pub fn new(filters: FilterState, page_size: u32) -> Self {
        Self {
            results: Vec::new(),
            query: String::new(),
            favorites: FavoritesStore::default(),
            active_tab: ViewTab::Trending,
            loading: false,
            pagination: Pagination::default(),
            animate_id: None,
            filters,
            page_size: page_size.max(1),
            status: None,
            latest_token: None,
            latest_kind: None,
            issued: 0,
        }
    }

    /// Allocates the next request token, marks it as latest and sets `loading`.
    pub fn issue_token(&mut self, kind: RequestKind) -> RequestToken {
        self.issued += 1;
        let token = RequestToken::new(self.issued);
        self.latest_token = Some(token);
        self.latest_kind = Some(kind);
        self.loading = true;
        token
    }

    /// Whether `token` belongs to the latest issued request.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest_token == Some(token)
    }

    #[must_use]
    pub const fn latest_token(&self) -> Option<RequestToken> {
        self.latest_token
    }

    /// Endpoint of the latest issued request.
    #[must_use]
    pub const fn latest_kind(&self) -> Option<RequestKind> {
        self.latest_kind
    }

    /// Issues a trending fetch for the current page.
    pub fn trending_request(&mut self) -> WorkerMessage {
        let token = self.issue_token(RequestKind::Trending);
        WorkerMessage::FetchTrending {
            token,
            params: TrendingParams {
                page: self.pagination.page(),
                limit: self.page_size,
            },
        }
    }

    /// Issues a search with the current query, page and filters.
    ///
    /// Returns `None` without issuing anything when the query is blank.
    pub fn search_request(&mut self) -> Option<WorkerMessage> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let params = SearchParams {
            query: query.to_string(),
            page: self.pagination.page(),
            rating: self.filters.rating,
            language: self.filters.language,
            limit: self.page_size,
        };
        let token = self.issue_token(RequestKind::Search);
        Some(WorkerMessage::Search { token, params })
    }

    /// Collection shown by the active tab.
    #[must_use]
    pub fn active_items(&self) -> &[Item] {
        match self.active_tab {
            ViewTab::Trending => &self.results,
            ViewTab::Favorites => self.favorites.items(),
        }
    }

    /// Item at a one-based grid position of the active tab.
    #[must_use]
    pub fn item_at(&self, position: usize) -> Option<&Item> {
        position
            .checked_sub(1)
            .and_then(|index| self.active_items().get(index))
    }

    /// Projects the state into a renderable view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> GridViewModel {
        let entries: Vec<DisplayEntry> = self
            .active_items()
            .iter()
            .enumerate()
            .map(|(index, item)| self.compute_display_entry(index + 1, item))
            .collect();

        let in_trending = self.active_tab == ViewTab::Trending;

        let pagination = (in_trending && !self.loading && !entries.is_empty()).then(|| {
            PaginationInfo {
                page: self.pagination.page(),
                can_prev: self.pagination.can_prev(),
                can_next: self.pagination.can_next(),
            }
        });

        GridViewModel {
            header: self.compute_header(),
            filters: in_trending.then_some(FilterBarInfo {
                rating: self.filters.rating,
                language: self.filters.language,
            }),
            search_bar: in_trending.then(|| SearchBarInfo {
                query: self.query.clone(),
            }),
            empty_state: self.compute_empty_state(entries.is_empty()),
            entries,
            loading: self.loading,
            pagination,
            footer: self.compute_footer(),
        }
    }

    fn compute_display_entry(&self, position: usize, item: &Item) -> DisplayEntry {
        DisplayEntry {
            position,
            id: item.id.clone(),
            title: item.title.clone(),
            display_url: item.display_url().to_string(),
            original_url: item.original_url().to_string(),
            is_favorited: self.favorites.is_favorited(&item.id),
            is_animating: self.animate_id.as_deref() == Some(item.id.as_str()),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let tabs = [ViewTab::Trending, ViewTab::Favorites]
            .into_iter()
            .map(|tab| {
                let label = match tab {
                    ViewTab::Trending => tab.label().to_string(),
                    ViewTab::Favorites => format!("{} ({})", tab.label(), self.favorites.len()),
                };
                TabInfo {
                    tab,
                    label,
                    active: tab == self.active_tab,
                }
            })
            .collect();

        HeaderInfo {
            title: "GIF Explorer".to_string(),
            tabs,
        }
    }

    fn compute_empty_state(&self, is_empty: bool) -> Option<EmptyState> {
        if !is_empty || self.loading {
            return None;
        }

        let state = match self.active_tab {
            ViewTab::Favorites => EmptyState {
                message: "No favorite GIFs yet.".to_string(),
                subtitle: "Use 'fav <n>' on a trending or search result to keep it here".to_string(),
            },
            ViewTab::Trending => EmptyState {
                message: "No GIFs to show.".to_string(),
                subtitle: "Try another search or switch back to trending".to_string(),
            },
        };
        Some(state)
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.active_tab {
            ViewTab::Trending => {
                "search <text>  n/p: page  rating <r>  lang <l>  reset  fav|copy|share|download <n>  f: favorites  q: quit"
            }
            ViewTab::Favorites => "fav|copy|share|download <n>  t: trending  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }
}
