//! Line commands typed at the prompt.
//!
//! Each line maps to one [`Event`] (or to the help screen). Parsing is pure;
//! the main loop feeds the resulting event to the handler.
//!
//! | Command                   | Event                      |
//! |---------------------------|----------------------------|
//! | `trending`, `t`           | `ShowTrending`             |
//! | `favorites`, `f`          | `ShowFavorites`            |
//! | `search <text>`, `/<text>`| `Search(text)`             |
//! | `query <text>`            | `SetQuery(text)`           |
//! | `enter`, `s`              | `SubmitSearch`             |
//! | `next`, `n` / `prev`, `p` | `NextPage` / `PrevPage`    |
//! | `rating <r>`, `lang <l>`  | `SetRating` / `SetLanguage`|
//! | `reset`                   | `ResetFilters`             |
//! | `fav\|copy\|share\|download <n>` | per-item events     |
//! | `help`, `?`               | help screen                |
//! | `quit`, `q`               | `Quit`                     |

use crate::app::modes::{Language, Rating};
use crate::app::Event;
use thiserror::Error;

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  trending | t            show trending GIFs (back to page 1)
  favorites | f           show favorites
  search <text> | /<text> search with the current filters
  query <text>            edit the query without searching
  enter | s               submit the current query
  next | n, prev | p      change page
  rating <g|pg|pg-13|r>   set the rating filter
  lang <en|es|fr|pt|de>   set the search language
  reset                   restore default filters
  fav <n>                 toggle favorite for entry n
  copy <n>                copy the original URL of entry n
  share <n>               show a share link for entry n
  download <n>            save entry n into the download directory
  help | ?                show this help
  quit | q                exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Help,
    /// Blank line; redraws the screen.
    Redraw,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a grid position")]
    BadPosition(String),

    #[error("unknown rating '{0}' (g, pg, pg-13, r)")]
    BadRating(String),

    #[error("unknown language '{0}' (en, es, fr, pt, de)")]
    BadLanguage(String),
}

/// Parses one input line.
///
/// # Errors
///
/// Returns a [`CommandError`] describing the problem for the status line.
///
/// # Examples
///
/// ```
/// use gif_explorer::app::Event;
/// use gif_explorer::shell::commands::{parse, Command};
///
/// assert_eq!(parse("/cats").unwrap(), Command::Event(Event::Search("cats".into())));
/// assert_eq!(parse("fav 3").unwrap(), Command::Event(Event::ToggleFavorite { position: 3 }));
/// ```
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Redraw);
    }

    if let Some(text) = line.strip_prefix('/') {
        return Ok(Command::Event(Event::Search(text.trim().to_string())));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = match word.to_ascii_lowercase().as_str() {
        "trending" | "t" => Event::ShowTrending,
        "favorites" | "favourites" | "f" => Event::ShowFavorites,
        "search" => Event::Search(required(rest, "search")?.to_string()),
        "query" => Event::SetQuery(rest.to_string()),
        "enter" | "s" => Event::SubmitSearch,
        "next" | "n" => Event::NextPage,
        "prev" | "p" => Event::PrevPage,
        "rating" => {
            let value = required(rest, "rating")?;
            let rating = value
                .parse::<Rating>()
                .map_err(|_| CommandError::BadRating(value.to_string()))?;
            Event::SetRating(rating)
        }
        "lang" | "language" => {
            let value = required(rest, "lang")?;
            let language = value
                .parse::<Language>()
                .map_err(|_| CommandError::BadLanguage(value.to_string()))?;
            Event::SetLanguage(language)
        }
        "reset" => Event::ResetFilters,
        "fav" => Event::ToggleFavorite { position: position(rest, "fav")? },
        "copy" => Event::CopyLink { position: position(rest, "copy")? },
        "share" => Event::Share { position: position(rest, "share")? },
        "download" | "dl" => Event::Download { position: position(rest, "download")? },
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => Event::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Command::Event(event))
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn position(rest: &str, command: &'static str) -> Result<usize, CommandError> {
    let value = required(rest, command)?;
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CommandError::BadPosition(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(line: &str) -> Event {
        match parse(line) {
            Ok(Command::Event(event)) => event,
            other => panic!("'{line}' parsed to {other:?}"),
        }
    }

    #[test]
    fn every_command_maps_to_its_event() {
        let cases = [
            ("trending", Event::ShowTrending),
            ("t", Event::ShowTrending),
            ("favorites", Event::ShowFavorites),
            ("f", Event::ShowFavorites),
            ("search funny cats", Event::Search("funny cats".to_string())),
            ("/dogs", Event::Search("dogs".to_string())),
            ("query birds", Event::SetQuery("birds".to_string())),
            ("query", Event::SetQuery(String::new())),
            ("enter", Event::SubmitSearch),
            ("s", Event::SubmitSearch),
            ("next", Event::NextPage),
            ("n", Event::NextPage),
            ("prev", Event::PrevPage),
            ("p", Event::PrevPage),
            ("rating pg-13", Event::SetRating(Rating::Pg13)),
            ("rating PG", Event::SetRating(Rating::Pg)),
            ("lang es", Event::SetLanguage(Language::Es)),
            ("reset", Event::ResetFilters),
            ("fav 2", Event::ToggleFavorite { position: 2 }),
            ("copy 1", Event::CopyLink { position: 1 }),
            ("share 4", Event::Share { position: 4 }),
            ("download 12", Event::Download { position: 12 }),
            ("quit", Event::Quit),
            ("Q", Event::Quit),
        ];

        for (line, expected) in cases {
            assert_eq!(event(line), expected, "line: {line}");
        }
    }

    #[test]
    fn help_and_blank_lines() {
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("   ").unwrap(), Command::Redraw);
    }

    #[test]
    fn malformed_lines_are_reported() {
        assert_eq!(parse("dance"), Err(CommandError::Unknown("dance".to_string())));
        assert_eq!(parse("search"), Err(CommandError::MissingArgument("search")));
        assert_eq!(parse("fav zero"), Err(CommandError::BadPosition("zero".to_string())));
        assert_eq!(parse("fav 0"), Err(CommandError::BadPosition("0".to_string())));
        assert_eq!(parse("rating nc-17"), Err(CommandError::BadRating("nc-17".to_string())));
        assert_eq!(parse("lang xx"), Err(CommandError::BadLanguage("xx".to_string())));
    }
}
