//! Actions representing side effects to be executed by the shell.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` and the
//! shell (`main.rs`) executes them in order: posting work to the background
//! worker, persisting filters, arming timers, or talking to the terminal.
//!
//! # Example
//!
//! ```rust
//! use gif_explorer::app::Action;
//! use gif_explorer::client::TrendingParams;
//! use gif_explorer::worker::{RequestToken, WorkerMessage};
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::FetchTrending {
//!     token: RequestToken::new(1),
//!     params: TrendingParams { page: 1, limit: 12 },
//! })];
//! assert_eq!(actions.len(), 1);
//! ```

use super::filters::FilterState;
use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands representing side effects to be executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a message to the background worker thread.
    ///
    /// Used for every network operation: trending fetches, searches and downloads.
    PostToWorker(WorkerMessage),

    /// Writes both filter values to the preference store.
    PersistFilters(FilterState),

    /// Arms a one-shot timer that later feeds
    /// [`Event::MarkerExpired`](crate::app::Event::MarkerExpired) back with the same id.
    ScheduleMarkerClear {
        /// Item id the marker was set for.
        id: String,
        /// Delay before the clear fires.
        after: Duration,
    },

    /// Places a URL on the user's clipboard.
    CopyLink {
        url: String,
    },

    /// Presents an external share link for the user to open.
    Share {
        url: String,
    },

    /// Ends the session.
    Quit,
}
