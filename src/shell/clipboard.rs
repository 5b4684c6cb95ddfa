//! Terminal clipboard access via OSC 52.
//!
//! Most modern terminals (and tmux with `set-clipboard on`) accept the OSC 52
//! escape and place its base64 payload on the system clipboard, which also
//! works over SSH. Terminals that ignore it simply print nothing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;

/// Builds the OSC 52 sequence setting the clipboard to `text`.
///
/// # Examples
///
/// ```
/// use gif_explorer::shell::clipboard::osc52_sequence;
///
/// assert_eq!(osc52_sequence("hi"), "\u{1b}]52;c;aGk=\u{7}");
/// ```
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text))
}

/// Writes the OSC 52 sequence for `text` to `out`.
///
/// # Errors
///
/// Returns the underlying I/O error if the terminal cannot be written.
pub fn copy_to_clipboard(out: &mut impl Write, text: &str) -> std::io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}
