//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → GridViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor and text-width utilities
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    DisplayEntry, EmptyState, FilterBarInfo, FooterInfo, GridViewModel, HeaderInfo,
    PaginationInfo, SearchBarInfo, TabInfo,
};
