//! Rating and language filters with their persisted form.
//!
//! The filter pair lives in memory on [`AppState`](crate::app::AppState); the
//! handler emits [`Action::PersistFilters`](crate::app::Action::PersistFilters)
//! whenever it changes, and the shell calls [`FilterState::persist`].

use super::modes::{Language, Rating};
use crate::domain::error::Result;
use crate::storage::KeyValueStore;

/// Store key for the rating filter.
pub const RATING_KEY: &str = "rating";

/// Store key for the language filter.
pub const LANG_KEY: &str = "lang";

/// Current rating and language filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub rating: Rating,
    pub language: Language,
}

impl FilterState {
    /// Reads both filters from `store`, falling back to defaults field by field.
    ///
    /// A missing key, an unreadable store or an unrecognised value only affects
    /// the field concerned.
    ///
    /// # Examples
    ///
    /// ```
    /// use gif_explorer::app::filters::FilterState;
    /// use gif_explorer::app::{Language, Rating};
    /// use gif_explorer::storage::{KeyValueStore, MemoryStore};
    ///
    /// let mut store = MemoryStore::default();
    /// store.set("lang", "pt")?;
    ///
    /// let filters = FilterState::load(&store);
    /// assert_eq!(filters.rating, Rating::G);
    /// assert_eq!(filters.language, Language::Pt);
    /// # Ok::<(), gif_explorer::ExplorerError>(())
    /// ```
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let rating = read_field(store, RATING_KEY).unwrap_or_default();
        let language = read_field(store, LANG_KEY).unwrap_or_default();

        tracing::debug!(rating = %rating, language = %language, "filters loaded");
        Self { rating, language }
    }

    /// Writes both filters to `store` as one update.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set_many(&[
            (RATING_KEY, self.rating.as_str()),
            (LANG_KEY, self.language.as_str()),
        ])
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Restores `g` / `en`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn read_field<T>(store: &dyn KeyValueStore, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key = key, error = %e, "failed to read stored filter");
            return None;
        }
    };

    raw.parse()
        .map_err(|e| tracing::warn!(key = key, error = %e, "ignoring stored filter"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonStore, MemoryStore};

    #[test]
    fn defaults_without_stored_values() {
        let store = MemoryStore::default();
        let filters = FilterState::load(&store);
        assert_eq!(filters.rating, Rating::G);
        assert_eq!(filters.language, Language::En);
    }

    #[test]
    fn every_combination_round_trips_through_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        for rating in Rating::ALL {
            for language in Language::ALL {
                let mut filters = FilterState::default();
                filters.set_rating(rating);
                filters.set_language(language);
                {
                    let mut store = JsonStore::open(path.clone()).unwrap();
                    filters.persist(&mut store).unwrap();
                }

                let reopened = JsonStore::open(path.clone()).unwrap();
                assert_eq!(FilterState::load(&reopened), filters);
            }
        }
    }

    #[test]
    fn reset_yields_defaults_from_any_state() {
        for rating in Rating::ALL {
            for language in Language::ALL {
                let mut filters = FilterState { rating, language };
                filters.reset();
                assert_eq!(filters.rating.as_str(), "g");
                assert_eq!(filters.language.as_str(), "en");
            }
        }
    }

    #[test]
    fn unrecognised_value_falls_back_for_that_field_only() {
        let mut store = MemoryStore::default();
        store.set(RATING_KEY, "nc-17").unwrap();
        store.set(LANG_KEY, "de").unwrap();

        let filters = FilterState::load(&store);
        assert_eq!(filters.rating, Rating::G);
        assert_eq!(filters.language, Language::De);
    }
}
