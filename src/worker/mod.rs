//! Background worker thread for network operations.
//!
//! All HTTP (trending, search, downloads) happens here so the UI loop stays
//! responsive. The UI posts [`WorkerMessage`]s and receives [`WorkerResponse`]s.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol and request tokens
//! - `handler`: message processing and thread lifecycle

pub mod handler;
pub mod messages;

pub use handler::{spawn, GifWorker, WorkerHandle};
pub use messages::{FetchErrorKind, FetchFailure, RequestToken, WorkerMessage, WorkerResponse};
