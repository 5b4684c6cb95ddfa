//! Worker thread message types.
//!
//! This module defines the request/response protocol between the UI loop and
//! the background worker. Fetch and search requests carry a [`RequestToken`] so
//! the UI can tell whether a response still matters when it arrives.

use crate::client::{SearchParams, TrendingParams};
use crate::domain::{ExplorerError, GifResponse};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Monotonic identifier attached to every issued fetch or search.
///
/// Only the response whose token equals the latest one issued is applied;
/// anything older is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Classification of a failed fetch, carried across the thread boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchErrorKind {
    /// The request could not complete.
    NetworkFailure,
    /// Trending endpoint returned a non-2xx status.
    BadStatus,
    /// Search endpoint returned a non-2xx status.
    SearchFailed,
    /// The body was not valid JSON of the expected shape.
    ParseFailure,
}

/// A failed fetch, reduced to what the UI needs to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl From<&ExplorerError> for FetchFailure {
    fn from(err: &ExplorerError) -> Self {
        let kind = match err {
            ExplorerError::BadStatus { .. } => FetchErrorKind::BadStatus,
            ExplorerError::SearchFailed { .. } => FetchErrorKind::SearchFailed,
            ExplorerError::ParseFailure(_) => FetchErrorKind::ParseFailure,
            _ => FetchErrorKind::NetworkFailure,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Messages sent from the UI loop to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch one page of the trending feed.
    FetchTrending {
        token: RequestToken,
        params: TrendingParams,
    },

    /// Run a keyword search.
    Search {
        token: RequestToken,
        params: SearchParams,
    },

    /// Save an item's original rendition into the download directory.
    Download {
        /// Item id, echoed back in the response.
        id: String,
        /// Source URL of the original rendition.
        url: String,
        /// File name to write, already sanitized.
        file_name: String,
    },
}

/// Responses sent from the worker thread back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A fetch or search completed with a decoded body.
    ResultsLoaded {
        token: RequestToken,
        response: GifResponse,
    },

    /// A fetch or search failed.
    FetchFailed {
        token: RequestToken,
        failure: FetchFailure,
    },

    /// A download was written to disk.
    Downloaded {
        id: String,
        path: PathBuf,
    },

    /// Any other worker-side failure.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
