//! Key/value store abstraction.
//!
//! This module defines the [`KeyValueStore`] trait behind which filter
//! preferences are persisted. The browser's local storage is the model: string
//! keys, string values, synchronous reads and writes.

use crate::domain::error::Result;

/// Abstraction over the persisted preference store.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map, used by tests
///
/// # Examples
///
/// ```
/// use gif_explorer::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("rating", "pg")?;
/// assert_eq!(store.get("rating")?.as_deref(), Some("pg"));
/// # Ok::<(), gif_explorer::ExplorerError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads a value. Returns `Ok(None)` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a single value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Writes several values as one logical update.
    ///
    /// The default implementation writes them one by one; backends that can do
    /// better (a single file write) override it so that either all or none of
    /// the values land.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails. With the default implementation,
    /// earlier entries may already have been written.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}
