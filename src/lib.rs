//! GIF Explorer: a terminal client for trending and searchable GIFs.
//!
//! GIF Explorer talks to a small backend proxy (`/api/trending`,
//! `/api/search`) and provides:
//! - A paginated trending feed
//! - Keyword search filtered by content rating and language
//! - Session favorites with a short highlight when an item is added
//! - Rating and language preferences persisted across sessions
//! - Copy, share and download actions for any listed item
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs, shell/)                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Request tokens                                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON file   │   │ - HTTP calls  │
//! │ - Theming     │   │ - Key/value   │   │ - Downloads   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                 │
//!                                         ┌───────────────┐
//!                                         │ client/       │
//!                                         │ - URLs        │
//!                                         │ - reqwest     │
//!                                         └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`client`]: Backend endpoints and the HTTP client
//! - [`domain`]: Core types (items, result pages, errors)
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Rotating file logging
//! - [`shell`]: Command parsing, timers, clipboard
//! - [`storage`]: Preference persistence
//! - [`ui`]: Terminal rendering with theme support
//! - [`worker`]: Background network thread
//!
//! # Configuration
//!
//! Read from `$GIF_EXPLORER_CONFIG`, else `<config_dir>/gif-explorer/config.toml`:
//!
//! ```toml
//! backend_base = "http://localhost:5050"
//! page_size = 12
//! request_timeout_secs = 10
//! storage_path = "~/.local/share/gif-explorer/preferences.json"
//! download_dir = "~/Downloads"
//! log_level = "info"
//! log_dir = "~/.local/share/gif-explorer"
//! theme = "dark"
//! ```
//!
//! `GIF_EXPLORER_BACKEND` overrides `backend_base`.
//!
//! # Example
//!
//! ```rust
//! use gif_explorer::storage::MemoryStore;
//! use gif_explorer::{handle_event, initialize, Action, Config, Event};
//!
//! let store = MemoryStore::default();
//! let mut state = initialize(&Config::default(), &store);
//!
//! let (render, actions) = handle_event(&mut state, &Event::Init)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), gif_explorer::ExplorerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod shell;
pub mod storage;
pub mod ui;
pub mod worker;

#[cfg(test)]
mod test_utils;

pub use app::{handle_event, Action, AppState, Event, Language, Rating, ViewTab};
pub use domain::{ExplorerError, Item, Result};
pub use ui::Theme;

use app::filters::FilterState;
use client::DEFAULT_PAGE_SIZE;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use storage::KeyValueStore;

/// Environment variable overriding [`Config::backend_base`].
pub const BACKEND_ENV: &str = "GIF_EXPLORER_BACKEND";

/// Environment variable naming the config file to load.
pub const CONFIG_ENV: &str = "GIF_EXPLORER_CONFIG";

const DEFAULT_BACKEND: &str = "http://localhost:5050";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_THEME: &str = "dark";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend proxy. Default: `http://localhost:5050`
    pub backend_base: String,

    /// Items per page. Default: 12
    pub page_size: u32,

    /// Per-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Preference file. Default: `<data_dir>/preferences.json`
    pub storage_path: PathBuf,

    /// Where downloads are saved. Default: the current directory
    pub download_dir: PathBuf,

    /// Log filter directive. Options: `trace`, `debug`, `info`, `warn`, `error`,
    /// or any `EnvFilter` directive. Default: `"info"`
    pub log_level: String,

    /// Directory of the log file. Default: `<data_dir>`
    pub log_dir: Option<PathBuf>,

    /// Built-in theme name (`dark`, `light`) or path to a theme TOML file.
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base: DEFAULT_BACKEND.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            storage_path: infrastructure::data_dir().join("preferences.json"),
            download_dir: PathBuf::from("."),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from a string map, falling back per field.
    ///
    /// # Parsing Rules
    ///
    /// - `backend_base`: non-empty string, trailing `/` removed
    /// - `page_size`: integer ≥ 1 (falls back to 12)
    /// - `request_timeout_secs`: integer ≥ 1 (falls back to 10)
    /// - `storage_path`, `download_dir`, `log_dir`: paths, `~` expanded
    /// - `log_level`, `theme`: non-empty strings
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use gif_explorer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "24".to_string());
    /// map.insert("request_timeout_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 24);
    /// assert_eq!(config.request_timeout_secs, 10);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };
        let positive = |key: &str| {
            text(key).and_then(|s| match s.parse::<u64>() {
                Ok(n) if n >= 1 => Some(n),
                _ => {
                    tracing::warn!(key, value = s, "invalid config value, using default");
                    None
                }
            })
        };

        Self {
            backend_base: text("backend_base")
                .map_or(defaults.backend_base, |s| s.trim_end_matches('/').to_string()),
            page_size: positive("page_size")
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(defaults.page_size),
            request_timeout_secs: positive("request_timeout_secs")
                .unwrap_or(defaults.request_timeout_secs),
            storage_path: text("storage_path")
                .map_or(defaults.storage_path, infrastructure::expand_tilde),
            download_dir: text("download_dir")
                .map_or(defaults.download_dir, infrastructure::expand_tilde),
            log_level: text("log_level").map_or(defaults.log_level, String::from),
            log_dir: text("log_dir").map(infrastructure::expand_tilde),
            theme: text("theme").map_or(defaults.theme, String::from),
        }
    }

    /// Loads a TOML config file.
    ///
    /// Top-level scalar values are read as strings and go through
    /// [`Config::from_map`], so unknown keys are ignored and bad values fall
    /// back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Io`] if the file cannot be read and
    /// [`ExplorerError::Config`] if it is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&contents)
            .map_err(|e| ExplorerError::Config(format!("{}: {e}", path.display())))?;

        let map = table
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(n) => n.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    _ => return None,
                };
                Some((key, text))
            })
            .collect();

        Ok(Self::from_map(&map))
    }

    /// Resolves the effective configuration from the environment.
    ///
    /// 1. File named by `GIF_EXPLORER_CONFIG`, else the platform config file
    /// 2. Defaults when no file exists or it cannot be loaded
    /// 3. `GIF_EXPLORER_BACKEND` applied on top
    #[must_use]
    pub fn load() -> Self {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an injectable environment lookup.
    #[must_use]
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let path = env(CONFIG_ENV)
            .map(|p| infrastructure::expand_tilde(&p))
            .unwrap_or_else(infrastructure::config_file);

        let config = if path.exists() {
            Self::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Self::default()
            })
        } else {
            Self::default()
        };

        config.with_env_overrides(env)
    }

    fn with_env_overrides(mut self, env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = env(BACKEND_ENV).filter(|b| !b.trim().is_empty()) {
            self.backend_base = base.trim().trim_end_matches('/').to_string();
        }
        self
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Builds the initial application state.
///
/// Filters are restored from `store`; everything else starts fresh (Trending,
/// page 1, no results, no favorites). The caller is expected to feed
/// [`Event::Init`] next.
pub fn initialize(config: &Config, store: &dyn KeyValueStore) -> AppState {
    tracing::debug!(backend = %config.backend_base, page_size = config.page_size, "initializing");

    AppState::new(FilterState::load(store), config.page_size)
}
