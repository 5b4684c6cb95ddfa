//! Session-scoped favorites.
//!
//! An ordered set of items keyed by id. Insertion order is kept so the
//! favorites grid renders stably; nothing here is persisted.

use crate::domain::Item;

/// Result of [`FavoritesStore::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Ordered set of favorited items, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesStore {
    items: Vec<Item>,
}

impl FavoritesStore {
    /// Removes the item if its id is present, otherwise appends it.
    ///
    /// # Examples
    ///
    /// ```
    /// use gif_explorer::app::favorites::{FavoritesStore, ToggleOutcome};
    /// use gif_explorer::domain::Item;
    ///
    /// let mut favorites = FavoritesStore::default();
    /// let item = Item::new("a", "first");
    ///
    /// assert_eq!(favorites.toggle(&item), ToggleOutcome::Added);
    /// assert!(favorites.is_favorited(&item.id));
    /// assert_eq!(favorites.toggle(&item), ToggleOutcome::Removed);
    /// assert!(favorites.is_empty());
    /// ```
    pub fn toggle(&mut self, item: &Item) -> ToggleOutcome {
        if let Some(pos) = self.items.iter().position(|f| f.id == item.id) {
            self.items.remove(pos);
            ToggleOutcome::Removed
        } else {
            self.items.push(item.clone());
            ToggleOutcome::Added
        }
    }

    #[must_use]
    pub fn is_favorited(&self, id: &str) -> bool {
        self.items.iter().any(|f| f.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
