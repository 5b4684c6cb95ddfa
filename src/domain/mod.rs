//! Domain layer for the GIF explorer.
//!
//! Core types shared by every other layer, independent of HTTP, storage or
//! terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: GIF item, rendition and result-page models
//!
//! # Examples
//!
//! ```
//! use gif_explorer::domain::{GifResponse, Result};
//!
//! fn decode(body: &str) -> Result<GifResponse> {
//!     Ok(serde_json::from_str(body)?)
//! }
//!
//! assert!(decode(r#"{"data": []}"#).is_ok());
//! assert!(decode("<html>").is_err());
//! ```

pub mod error;
pub mod item;

pub use error::{ExplorerError, Result};
pub use item::{GifResponse, Item, PageInfo, Rendition};
