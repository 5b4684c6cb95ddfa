//! Platform directory resolution.
//!
//! Preferences and logs live under the platform data directory
//! (`~/.local/share/gif-explorer` on Linux); the optional config file under
//! the platform config directory. When the platform offers neither, the
//! current directory is used.

use std::path::PathBuf;

/// Directory name used under the platform data and config roots.
pub const APP_DIR_NAME: &str = "gif-explorer";

/// Returns the data directory holding `preferences.json` and the log file.
///
/// # Examples
///
/// ```
/// use gif_explorer::infrastructure::data_dir;
///
/// assert!(data_dir().ends_with("gif-explorer"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Returns the default location of the TOML config file.
#[must_use]
pub fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("config.toml")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or a tilde when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use gif_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/gifs"), home.join("gifs"));
        }
        assert_eq!(expand_tilde("gifs/~x"), PathBuf::from("gifs/~x"));
    }

    #[test]
    fn config_file_is_named_after_app() {
        let path = config_file();
        assert!(path.ends_with("gif-explorer/config.toml"));
    }
}
