//! Backend proxy client.
//!
//! The backend exposes two read-only endpoints, `/api/trending` and
//! `/api/search`, both answering with the upstream GIF API's JSON body. This
//! module defines the request parameters, the [`GifApi`] seam the worker calls
//! through, and the blocking HTTP implementation.
//!
//! # Modules
//!
//! - [`url`]: query-string construction and percent-encoding
//! - [`http`]: `reqwest`-based [`HttpClient`]

pub mod http;
pub mod url;

pub use http::HttpClient;

use crate::app::modes::{Language, Rating};
use crate::domain::{GifResponse, Result};
use serde::{Deserialize, Serialize};

/// Items requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Parameters of a `/api/search` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub page: u32,
    pub rating: Rating,
    pub language: Language,
    pub limit: u32,
}

/// Parameters of a `/api/trending` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingParams {
    pub page: u32,
    pub limit: u32,
}

/// Read access to the backend, one attempt per call.
///
/// Implementations must not retry; the caller decides what a failure means.
pub trait GifApi: Send {
    /// Fetches one page of the trending feed.
    ///
    /// # Errors
    ///
    /// [`NetworkFailure`](crate::ExplorerError::NetworkFailure),
    /// [`BadStatus`](crate::ExplorerError::BadStatus) or
    /// [`ParseFailure`](crate::ExplorerError::ParseFailure).
    fn trending(&self, params: &TrendingParams) -> Result<GifResponse>;

    /// Searches by keyword.
    ///
    /// # Errors
    ///
    /// [`NetworkFailure`](crate::ExplorerError::NetworkFailure),
    /// [`SearchFailed`](crate::ExplorerError::SearchFailed) or
    /// [`ParseFailure`](crate::ExplorerError::ParseFailure).
    fn search(&self, params: &SearchParams) -> Result<GifResponse>;

    /// Downloads raw bytes from an arbitrary URL (media hosts, not the backend).
    ///
    /// # Errors
    ///
    /// [`NetworkFailure`](crate::ExplorerError::NetworkFailure) or
    /// [`BadStatus`](crate::ExplorerError::BadStatus).
    fn download(&self, url: &str) -> Result<Vec<u8>>;
}
