//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user commands,
//! timer expirations and worker responses, translating them into state
//! changes and action sequences. It performs no I/O itself.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the command parser, the timer wheel or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for the shell to execute
//!
//! Filter persistence is evaluated once per transition: if the rating or
//! language differs afterwards, an [`Action::PersistFilters`] is appended.
//!
//! # Example
//!
//! ```rust
//! use gif_explorer::app::{handle_event, AppState, Event};
//! use gif_explorer::app::filters::FilterState;
//!
//! let mut state = AppState::new(FilterState::default(), 12);
//! let (render, actions) = handle_event(&mut state, &Event::Init)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), gif_explorer::ExplorerError>(())
//! ```

use super::favorites::ToggleOutcome;
use super::modes::{Language, Rating, ViewTab};
use super::state::RequestKind;
use crate::app::{Action, AppState};
use crate::client::url::share_link;
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::time::Duration;

/// How long the favorite highlight stays on an item.
pub const MARKER_DURATION: Duration = Duration::from_millis(300);

/// Events triggered by user commands, timers, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// First event of a session; loads the trending feed.
    Init,

    /// Switches to the Trending tab, back to page 1, and refetches.
    ShowTrending,
    /// Switches to the Favorites tab. No fetch.
    ShowFavorites,

    /// Replaces the search text without submitting it.
    SetQuery(String),
    /// Searches with the current query, page and filters.
    SubmitSearch,
    /// Sets the query and submits it in one step.
    Search(String),

    NextPage,
    PrevPage,

    SetRating(Rating),
    SetLanguage(Language),
    /// Restores default filters and persists them.
    ResetFilters,

    /// Toggles the favorite state of the item at a one-based grid position.
    ToggleFavorite {
        position: usize,
    },
    /// Copies the original URL of the item at `position`.
    CopyLink {
        position: usize,
    },
    /// Produces a share link for the item at `position`.
    Share {
        position: usize,
    },
    /// Saves the original rendition of the item at `position`.
    Download {
        position: usize,
    },

    /// A marker-clear timer fired for `id`.
    MarkerExpired {
        id: String,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the visible state changed and a render is due.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for transitions that
/// validate input against external state.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let filters_before = state.filters;
    let (render, mut actions) = dispatch(state, event);

    let persist_queued = actions
        .iter()
        .any(|action| matches!(action, Action::PersistFilters(_)));
    if state.filters != filters_before && !persist_queued {
        tracing::debug!(
            rating = %state.filters.rating,
            language = %state.filters.language,
            "filters changed"
        );
        actions.push(Action::PersistFilters(state.filters));
    }

    Ok((render, actions))
}

fn dispatch(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Init | Event::ShowTrending => {
            state.active_tab = ViewTab::Trending;
            state.pagination.reset();
            let message = state.trending_request();
            tracing::debug!(page = state.pagination.page(), "showing trending");
            (true, vec![Action::PostToWorker(message)])
        }
        Event::ShowFavorites => {
            if state.active_tab == ViewTab::Favorites {
                return (false, vec![]);
            }
            state.active_tab = ViewTab::Favorites;
            (true, vec![])
        }
        Event::SetQuery(text) => {
            if state.query == *text {
                return (false, vec![]);
            }
            state.query.clone_from(text);
            (true, vec![])
        }
        Event::SubmitSearch => submit_search(state),
        Event::Search(text) => {
            if state.active_tab != ViewTab::Trending {
                tracing::debug!("search ignored outside trending view");
                return (false, vec![]);
            }
            state.query.clone_from(text);
            let (_, actions) = submit_search(state);
            (true, actions)
        }
        Event::NextPage => change_page(state, |pagination| pagination.next()),
        Event::PrevPage => change_page(state, |pagination| pagination.prev()),
        Event::SetRating(rating) => {
            state.filters.set_rating(*rating);
            (true, vec![])
        }
        Event::SetLanguage(language) => {
            state.filters.set_language(*language);
            (true, vec![])
        }
        Event::ResetFilters => {
            state.filters.reset();
            (true, vec![Action::PersistFilters(state.filters)])
        }
        Event::ToggleFavorite { position } => {
            let Some(item) = state.item_at(*position).cloned() else {
                return ignore_position(*position);
            };

            match state.favorites.toggle(&item) {
                ToggleOutcome::Added => {
                    tracing::debug!(id = %item.id, "favorite added");
                    state.animate_id = Some(item.id.clone());
                    (
                        true,
                        vec![Action::ScheduleMarkerClear {
                            id: item.id,
                            after: MARKER_DURATION,
                        }],
                    )
                }
                ToggleOutcome::Removed => {
                    tracing::debug!(id = %item.id, "favorite removed");
                    (true, vec![])
                }
            }
        }
        Event::CopyLink { position } => {
            let Some(url) = original_url_at(state, *position) else {
                return ignore_position(*position);
            };
            state.status = Some(format!("Copied link: {url}"));
            (true, vec![Action::CopyLink { url }])
        }
        Event::Share { position } => {
            let Some(url) = original_url_at(state, *position) else {
                return ignore_position(*position);
            };
            (true, vec![Action::Share { url: share_link(&url) }])
        }
        Event::Download { position } => {
            let Some(item) = state.item_at(*position) else {
                return ignore_position(*position);
            };
            if item.original_url().is_empty() {
                return ignore_position(*position);
            }
            let id = item.id.clone();
            let message = WorkerMessage::Download {
                id: id.clone(),
                url: item.original_url().to_string(),
                file_name: item.download_file_name(),
            };
            state.status = Some(format!("Downloading {id}..."));
            (true, vec![Action::PostToWorker(message)])
        }
        Event::MarkerExpired { id } => {
            if state.animate_id.as_deref() == Some(id.as_str()) {
                state.animate_id = None;
                (true, vec![])
            } else {
                tracing::trace!(id = %id, current = ?state.animate_id, "stale marker clear ignored");
                (false, vec![])
            }
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
        Event::Quit => (false, vec![Action::Quit]),
    }
}

fn submit_search(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.active_tab != ViewTab::Trending {
        tracing::debug!("search ignored outside trending view");
        return (false, vec![]);
    }

    match state.search_request() {
        Some(message) => {
            tracing::debug!(query = %state.query, page = state.pagination.page(), "search submitted");
            (true, vec![Action::PostToWorker(message)])
        }
        None => {
            tracing::debug!("empty query, search skipped");
            (false, vec![])
        }
    }
}

fn change_page(
    state: &mut AppState,
    step: impl FnOnce(&mut super::pagination::Pagination) -> bool,
) -> (bool, Vec<Action>) {
    if state.active_tab != ViewTab::Trending {
        return (false, vec![]);
    }
    if !step(&mut state.pagination) {
        return (false, vec![]);
    }

    tracing::debug!(page = state.pagination.page(), "page changed");
    let message = state.trending_request();
    (true, vec![Action::PostToWorker(message)])
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::ResultsLoaded { token, response } => {
            if !state.is_current(*token) {
                tracing::debug!(token = %token, latest = ?state.latest_token(), "stale results discarded");
                return (false, vec![]);
            }
            state.results.clone_from(&response.data);
            // Page controls drive the trending feed, so only its metadata caps them.
            let page_info = match state.latest_kind() {
                Some(RequestKind::Trending) => response.pagination,
                _ => None,
            };
            state.pagination.record(page_info);
            state.loading = false;
            state.status = None;
            tracing::debug!(token = %token, items = state.results.len(), "results applied");
            (true, vec![])
        }
        WorkerResponse::FetchFailed { token, failure } => {
            if !state.is_current(*token) {
                tracing::debug!(token = %token, "stale failure discarded");
                return (false, vec![]);
            }
            tracing::warn!(token = %token, kind = ?failure.kind, error = %failure.message, "fetch failed");
            state.loading = false;
            state.status = Some(failure.message.clone());
            (true, vec![])
        }
        WorkerResponse::Downloaded { id, path } => {
            state.status = Some(format!("Saved {id} to {}", path.display()));
            (true, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::warn!(error = %message, "worker error");
            state.status = Some(message.clone());
            (true, vec![])
        }
    }
}

fn original_url_at(state: &AppState, position: usize) -> Option<String> {
    state
        .item_at(position)
        .map(|item| item.original_url().to_string())
        .filter(|url| !url.is_empty())
}

fn ignore_position(position: usize) -> (bool, Vec<Action>) {
    tracing::debug!(position, "no item at position");
    (false, vec![])
}
