//! Blocking HTTP implementation of [`GifApi`].
//!
//! Runs on the worker thread, so blocking I/O never stalls the UI loop.

use super::url::{search_url, trending_url};
use super::{GifApi, SearchParams, TrendingParams};
use crate::domain::error::{ExplorerError, Result};
use crate::domain::GifResponse;
use std::time::Duration;

/// `reqwest`-backed client for the backend proxy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base: String,
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Creates a client for `base` (e.g. `http://localhost:5050`).
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the underlying client cannot be built.
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gif-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExplorerError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base: base.into(), client })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Issues a GET and returns the body of a 2xx response.
    ///
    /// `on_status` maps a non-2xx status to the caller's error variant.
    fn get_text(&self, url: &str, on_status: fn(u16) -> ExplorerError) -> Result<String> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ExplorerError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "non-success status");
            return Err(on_status(status.as_u16()));
        }

        response
            .text()
            .map_err(|e| ExplorerError::NetworkFailure(e.to_string()))
    }

    fn decode(body: &str) -> Result<GifResponse> {
        let parsed: GifResponse = serde_json::from_str(body)?;
        tracing::debug!(items = parsed.data.len(), "response decoded");
        Ok(parsed)
    }
}

impl GifApi for HttpClient {
    fn trending(&self, params: &TrendingParams) -> Result<GifResponse> {
        let _span = tracing::debug_span!("http_trending", page = params.page).entered();
        let url = trending_url(&self.base, params);
        let body = self.get_text(&url, |status| ExplorerError::BadStatus { status })?;
        Self::decode(&body)
    }

    fn search(&self, params: &SearchParams) -> Result<GifResponse> {
        let _span = tracing::debug_span!("http_search", query = %params.query, page = params.page).entered();
        let url = search_url(&self.base, params);
        let body = self.get_text(&url, |status| ExplorerError::SearchFailed { status })?;
        Self::decode(&body)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let _span = tracing::debug_span!("http_download", url = %url).entered();

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ExplorerError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerError::BadStatus { status: status.as_u16() });
        }

        let bytes = response
            .bytes()
            .map_err(|e| ExplorerError::NetworkFailure(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
