//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal shell (`main.rs`) and the
//! domain/storage/worker layers. Everything here is pure: transitions take
//! the current [`AppState`] and an [`Event`], mutate the state, and return the
//! [`Action`]s the shell should perform.
//!
//! ```text
//! Commands → Events → Event Handler → State Mutations → Actions → Side Effects
//!                          ↑                                  ↓
//!                          └──── Worker Responses / Timers ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`favorites`]: Session-scoped favorites set
//! - [`filters`]: Rating/language filters and their persisted form
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Tab, rating and language enums
//! - [`pagination`]: Page cursor
//! - [`state`]: Application state and view model computation

pub mod actions;
pub mod favorites;
pub mod filters;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, MARKER_DURATION};
pub use modes::{Language, Rating, ViewTab};
pub use state::AppState;
