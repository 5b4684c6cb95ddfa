//! Request URL construction for the backend proxy.
//!
//! URLs are built by hand rather than through a form encoder so that the query
//! string matches what a browser's `encodeURIComponent` would send: spaces as
//! `%20`, parameters in a fixed order.

use super::{SearchParams, TrendingParams};

/// Share target that accepts the message text as a query parameter.
const SHARE_BASE: &str = "https://wa.me/";

/// Percent-encode a string for use as a URL query value.
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through, a space becomes
/// `%20`, and every other byte is written as `%XX` with uppercase hex digits.
///
/// # Examples
///
/// ```
/// use gif_explorer::client::url::percent_encode;
///
/// assert_eq!(percent_encode("cats"), "cats");
/// assert_eq!(percent_encode("happy cat & dog"), "happy%20cat%20%26%20dog");
/// assert_eq!(percent_encode("café"), "caf%C3%A9");
/// ```
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(b));
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `{base}/api/search?q=..&page=..&limit=..&rating=..&lang=..`
#[must_use]
pub fn search_url(base: &str, params: &SearchParams) -> String {
    format!(
        "{}/api/search?q={}&page={}&limit={}&rating={}&lang={}",
        trim_base(base),
        percent_encode(&params.query),
        params.page,
        params.limit,
        params.rating.as_str(),
        params.language.as_str(),
    )
}

/// `{base}/api/trending?limit=..&page=..`
#[must_use]
pub fn trending_url(base: &str, params: &TrendingParams) -> String {
    format!(
        "{}/api/trending?limit={}&page={}",
        trim_base(base),
        params.limit,
        params.page,
    )
}

/// External share link carrying `url` as the message text.
///
/// # Examples
///
/// ```
/// use gif_explorer::client::url::share_link;
///
/// assert_eq!(
///     share_link("https://m.example/a.gif"),
///     "https://wa.me/?text=https%3A%2F%2Fm.example%2Fa.gif"
/// );
/// ```
#[must_use]
pub fn share_link(url: &str) -> String {
    format!("{SHARE_BASE}?text={}", percent_encode(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{Language, Rating};

    #[test]
    fn search_url_matches_backend_contract() {
        let params = SearchParams {
            query: "cats".to_string(),
            page: 2,
            rating: Rating::Pg,
            language: Language::Es,
            limit: 12,
        };
        assert_eq!(
            search_url("http://localhost:5050", &params),
            "http://localhost:5050/api/search?q=cats&page=2&limit=12&rating=pg&lang=es"
        );
    }

    #[test]
    fn search_url_encodes_query_and_trims_base() {
        let params = SearchParams {
            query: "funny dogs?".to_string(),
            page: 1,
            rating: Rating::Pg13,
            language: Language::En,
            limit: 24,
        };
        assert_eq!(
            search_url("http://proxy/", &params),
            "http://proxy/api/search?q=funny%20dogs%3F&page=1&limit=24&rating=pg-13&lang=en"
        );
    }

    #[test]
    fn trending_url_matches_backend_contract() {
        assert_eq!(
            trending_url("http://localhost:5050", &TrendingParams { page: 1, limit: 12 }),
            "http://localhost:5050/api/trending?limit=12&page=1"
        );
    }
}
