//! GIF item model as delivered by the backend proxy.
//!
//! The backend forwards the upstream GIF API response untouched, so the shapes
//! here follow that API: every item carries an `images` object keyed by rendition
//! name, and each page of results comes with a `pagination` object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rendition used for grid display.
pub const DISPLAY_RENDITION: &str = "fixed_height";

/// Full-size rendition used for copy, share and download.
pub const ORIGINAL_RENDITION: &str = "original";

/// A single rendition of an animated image.
///
/// Upstream renditions carry many more fields (width, size, webp, mp4...);
/// only the URL is needed here and the rest is ignored during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendition {
    #[serde(default)]
    pub url: String,
}

/// An animated-image search result.
///
/// Items are immutable once received. The `id` is opaque and unique per item;
/// favorites and the animation marker are keyed on it.
///
/// # Examples
///
/// ```
/// use gif_explorer::domain::Item;
///
/// let item = Item::new("abc123", "Dancing cat")
///     .with_rendition("fixed_height", "https://media.example/abc123/200.gif")
///     .with_rendition("original", "https://media.example/abc123/giphy.gif");
///
/// assert_eq!(item.display_url(), "https://media.example/abc123/200.gif");
/// assert_eq!(item.download_file_name(), "gif-abc123.gif");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub images: BTreeMap<String, Rendition>,
}

impl Item {
    /// Creates an item without renditions.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            images: BTreeMap::new(),
        }
    }

    /// Adds or replaces a named rendition.
    #[must_use]
    pub fn with_rendition(mut self, name: &str, url: impl Into<String>) -> Self {
        self.images.insert(name.to_string(), Rendition { url: url.into() });
        self
    }

    /// URL of a named rendition, or an empty string when the item lacks it.
    #[must_use]
    pub fn rendition_url(&self, name: &str) -> &str {
        self.images.get(name).map_or("", |r| r.url.as_str())
    }

    #[must_use]
    pub fn display_url(&self) -> &str {
        self.rendition_url(DISPLAY_RENDITION)
    }

    #[must_use]
    pub fn original_url(&self) -> &str {
        self.rendition_url(ORIGINAL_RENDITION)
    }

    /// File name used when saving the original rendition to disk.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        let safe_id: String = self
            .id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("gif-{safe_id}.gif")
    }
}

/// Upstream pagination metadata attached to every result page.
///
/// All fields are optional because the backend forwards whatever the upstream
/// API returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

impl PageInfo {
    /// Whether the metadata proves there is nothing past this page.
    ///
    /// Returns `false` whenever `total_count` is unknown.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        match self.total_count {
            Some(total) => {
                let seen = self.offset.unwrap_or(0).saturating_add(self.count.unwrap_or(0));
                seen >= total
            }
            None => false,
        }
    }
}

/// Body returned by both `/api/trending` and `/api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifResponse {
    pub data: Vec<Item>,
    #[serde(default)]
    pub pagination: Option<PageInfo>,
}
