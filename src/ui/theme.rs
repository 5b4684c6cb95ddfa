//! Theme management and ANSI escape sequence generation.
//!
//! Themes are small TOML documents mapping UI roles to hex colors. Two are
//! built in (`dark`, the default, and `light`); any other value of the
//! `theme` config key is treated as a path to a TOML file of the same shape.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! favorite_fg = "#f38ba8"
//! marker_fg = "#1e1e2e"
//! marker_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! status_fg = "#fab387"
//! ```
//!
//! # Example
//!
//! ```rust
//! use gif_explorer::ui::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! let line = format!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! assert!(line.starts_with("\u{1b}[1m"));
//! ```

use crate::domain::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DARK: &str = r##"
name = "dark"

[colors]
header_fg = "#cdd6f4"
tab_active_fg = "#1e1e2e"
tab_active_bg = "#cba6f7"
text_normal = "#cdd6f4"
text_dim = "#6c7086"
border = "#45475a"
search_bar_border = "#cba6f7"
favorite_fg = "#f38ba8"
marker_fg = "#1e1e2e"
marker_bg = "#f9e2af"
empty_state_fg = "#89b4fa"
status_fg = "#fab387"
"##;

const LIGHT: &str = r##"
name = "light"

[colors]
header_fg = "#4c4f69"
tab_active_fg = "#eff1f5"
tab_active_bg = "#8839ef"
text_normal = "#4c4f69"
text_dim = "#9ca0b0"
border = "#bcc0cc"
search_bar_border = "#8839ef"
favorite_fg = "#d20f39"
marker_fg = "#eff1f5"
marker_bg = "#df8e1d"
empty_state_fg = "#1e66f5"
status_fg = "#fe640b"
"##;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for every UI role.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active tab and selected filter value.
    pub tab_active_fg: String,
    pub tab_active_bg: String,

    pub text_normal: String,
    /// Secondary text (URLs, footer, disabled controls).
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    /// Heart shown next to favorited entries.
    pub favorite_fg: String,

    /// Highlight for an entry that was just favorited.
    pub marker_fg: String,
    pub marker_bg: String,

    pub empty_state_fg: String,

    /// Status line (errors, saved downloads).
    pub status_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`dark` or `light`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "dark" => DARK,
            "light" => LIGHT,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Io`] if the file cannot be read and
    /// [`ExplorerError::Config`] if it is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ExplorerError::Config(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves the `theme` config value: a built-in name, else a file path.
    ///
    /// Falls back to the default theme when neither works.
    #[must_use]
    pub fn resolve(name_or_path: &str) -> Self {
        if let Some(theme) = Self::from_name(name_or_path) {
            return theme;
        }

        match Self::from_file(name_or_path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(theme = %name_or_path, error = %e, "unknown theme, using default");
                Self::default()
            }
        }
    }

    /// Parses `#rrggbb` (leading `#` optional). White when malformed.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        const WHITE: (u8, u8, u8) = (255, 255, 255);

        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return WHITE;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        match (channel(0), channel(2), channel(4)) {
            (Some(r), Some(g), Some(b)) => (r, g, b),
            _ => WHITE,
        }
    }

    /// Truecolor foreground escape.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// Truecolor background escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `dark` TOML is invalid.
    fn default() -> Self {
        Self::from_name("dark").expect("Built-in dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("dark").unwrap().name, "dark");
        assert_eq!(Theme::from_name("light").unwrap().name, "light");
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, "dark");
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_overrides_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        fs::write(&path, DARK.replace("name = \"dark\"", "name = \"mine\"")).unwrap();

        let theme = Theme::resolve(path.to_str().unwrap());
        assert_eq!(theme.name, "mine");

        let fallback = Theme::resolve(dir.path().join("missing.toml").to_str().unwrap());
        assert_eq!(fallback.name, "dark");
    }
}
