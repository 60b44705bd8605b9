//! Core types used throughout the project.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A supported UI language.
///
/// `Ar` is the primary (right-to-left) language of the site, `En` the
/// secondary (left-to-right) one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Ar,
    En,
}

/// Text direction of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl LanguageCode {
    /// All supported languages, primary first.
    pub const ALL: [Self; 2] = [Self::Ar, Self::En];

    #[must_use]
    pub const fn primary() -> Self {
        Self::Ar
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    /// The language a toggle switches to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Parses a language tag such as `ar`, `ar-SA`, `en_US` or `EN`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary_subtag =
            code.trim().split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
        match primary_subtag.as_str() {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Body class marking the active language (`lang-ar` / `lang-en`).
    #[must_use]
    pub fn body_class(self) -> String {
        format!("lang-{}", self.code())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Direction {
    /// Value of the `dir` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}
