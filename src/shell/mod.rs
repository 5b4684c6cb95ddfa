//! Terminal shell helpers used by the main loop.
//!
//! - [`commands`]: input line parsing into events
//! - [`timers`]: deferred marker clears tagged with item ids
//! - [`clipboard`]: OSC 52 clipboard writes

pub mod clipboard;
pub mod commands;
pub mod timers;

pub use commands::{parse, Command, CommandError, HELP};
pub use timers::MarkerTimers;
