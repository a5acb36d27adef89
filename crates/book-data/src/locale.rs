//! Supported catalogue locales.
//!
//! A locale selects the title word tables as well as the `fake` data set
//! used for person and company names. Tags are resolved once
//! at the boundary; the generator only ever sees a [`Locale`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// A catalogue locale.
///
/// # Example
///
/// ```
/// use book_data::Locale;
///
/// let locale: Locale = "fr-FR".parse().expect("supported tag");
/// assert_eq!(locale, Locale::FrFr);
/// assert_eq!(locale.tag(), "fr-FR");
/// assert!("xx-XX".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English (United States).
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// German (Germany).
    #[serde(rename = "de-DE")]
    DeDe,
    /// French (France).
    #[serde(rename = "fr-FR")]
    FrFr,
    /// Japanese (Japan).
    #[serde(rename = "ja-JP")]
    JaJp,
}

impl Locale {
    /// Every supported locale, in tag order.
    pub const ALL: [Self; 4] = [Self::EnUs, Self::DeDe, Self::FrFr, Self::JaJp];

    /// Returns the BCP 47 tag for this locale.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::JaJp => "ja-JP",
        }
    }

    /// Returns the human-readable name shown in locale pickers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EnUs => "English (USA)",
            Self::DeDe => "Deutsch (Deutschland)",
            Self::FrFr => "Français (France)",
            Self::JaJp => "日本語 (日本)",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag() == s)
            .ok_or_else(|| LocaleError::Unsupported { tag: s.to_owned() })
    }
}
