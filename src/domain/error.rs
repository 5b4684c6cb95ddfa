//! Error types for the GIF explorer.
//!
//! This module defines the centralized error type [`ExplorerError`] and a type alias
//! [`Result`] used throughout the crate. Network-facing variants mirror the failure
//! kinds a fetch can end in; the rest cover storage, configuration and worker plumbing.

use thiserror::Error;

/// The main error type for GIF explorer operations.
///
/// Fetch failures are split by where they happened: the request never completed
/// ([`NetworkFailure`](Self::NetworkFailure)), the backend answered with a non-2xx
/// status ([`BadStatus`](Self::BadStatus) for trending, [`SearchFailed`](Self::SearchFailed)
/// for search), or the body could not be decoded ([`ParseFailure`](Self::ParseFailure)).
///
/// # Examples
///
/// ```
/// use gif_explorer::ExplorerError;
///
/// let err = ExplorerError::SearchFailed { status: 502 };
/// assert_eq!(err.to_string(), "Failed to search GIFs (HTTP 502)");
/// ```
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The HTTP request could not be completed (connection refused, timeout, DNS).
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The trending endpoint answered with a non-2xx status.
    #[error("Failed to fetch trending GIFs (HTTP {status})")]
    BadStatus {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// The search endpoint answered with a non-2xx status.
    #[error("Failed to search GIFs (HTTP {status})")]
    SearchFailed {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("Malformed response body: {0}")]
    ParseFailure(String),

    /// Reading or writing the preference store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailure(err.to_string())
    }
}

/// A specialized `Result` type for GIF explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
