//! View and filter enums for the application state machine.
//!
//! # State Machine
//!
//! The application shows one of two views:
//! - **Trending**: the current result set (trending feed or last search),
//!   with filters, search bar and pagination
//! - **Favorites**: the favorites collected this session, no pagination
//!
//! Filters are two closed sets of wire values accepted by the backend:
//! [`Rating`] and [`Language`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which collection the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewTab {
    /// Current result set from the trending feed or the last search.
    #[default]
    Trending,

    /// Items favorited during this session.
    Favorites,
}

impl ViewTab {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trending => "Trending",
            Self::Favorites => "Favorites",
        }
    }
}

/// Content rating filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rating {
    #[default]
    G,
    Pg,
    Pg13,
    R,
}

impl Rating {
    /// All ratings in selector order.
    pub const ALL: [Self; 4] = [Self::G, Self::Pg, Self::Pg13, Self::R];

    /// Value sent as the `rating` query parameter and stored under the `rating` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Pg => "pg",
            Self::Pg13 => "pg-13",
            Self::R => "r",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
        }
    }
}

/// Language used by the backend to interpret search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Pt,
    De,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Self; 5] = [Self::En, Self::Es, Self::Fr, Self::Pt, Self::De];

    /// Value sent as the `lang` query parameter and stored under the `lang` key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Pt => "pt",
            Self::De => "de",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::Pt => "Portuguese",
            Self::De => "German",
        }
    }
}

/// Error returned when a stored or typed filter value is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownValue {}

impl FromStr for Rating {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == wanted)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

impl FromStr for Language {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_parse_back() {
        for rating in Rating::ALL {
            assert_eq!(rating.as_str().parse::<Rating>(), Ok(rating));
        }
        for language in Language::ALL {
            assert_eq!(language.as_str().parse::<Language>(), Ok(language));
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_rejects_unknown() {
        assert_eq!("PG-13".parse::<Rating>(), Ok(Rating::Pg13));
        assert_eq!(" ES ".parse::<Language>(), Ok(Language::Es));
        assert!("nc-17".parse::<Rating>().is_err());
        assert!("it".parse::<Language>().is_err());
    }
}
