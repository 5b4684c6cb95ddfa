//! Storage layer for persisted preferences.
//!
//! Only the two filter keys (`rating`, `lang`) are ever persisted. Favorites are
//! deliberately kept in memory for the lifetime of the session.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: in-process implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use json::JsonStore;
pub use memory::MemoryStore;
