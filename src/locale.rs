// SPDX-License-Identifier: MPL-2.0
//! The closed set of locales the site is translated into.
//!
//! Two ways in from a string:
//! - [`Locale::from_code`] is an exact membership test. It is what the
//!   session uses when restoring a persisted value, so anything that is not
//!   byte-for-byte one of the supported codes is rejected.
//! - [`str::parse`] is lenient and meant for human input (`--lang en_us`):
//!   the value is canonicalized through `unic-langid` before the same
//!   membership test.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    /// All supported locales, in language-picker order.
    pub const ALL: [Locale; 3] = [Locale::PtBr, Locale::EnUs, Locale::EsEs];

    /// Locale active before anything has been restored or selected.
    pub const DEFAULT: Locale = Locale::PtBr;

    pub fn code(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
            Locale::EsEs => "es-ES",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn option(self) -> &'static LanguageOption {
        current_language(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let langid = s
            .trim()
            .parse::<LanguageIdentifier>()
            .map_err(|_| Error::UnsupportedLocale(s.to_string()))?;
        Self::from_code(&langid.to_string()).ok_or_else(|| Error::UnsupportedLocale(s.to_string()))
    }
}

/// Display data for one entry of the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: Locale,
    /// Flag emoji shown next to the label.
    pub glyph: &'static str,
    /// Native language name.
    pub label: &'static str,
}

pub const LANGUAGES: [LanguageOption; 3] = [
    LanguageOption {
        locale: Locale::PtBr,
        glyph: "🇧🇷",
        label: "Português (BR)",
    },
    LanguageOption {
        locale: Locale::EnUs,
        glyph: "🇺🇸",
        label: "English (US)",
    },
    LanguageOption {
        locale: Locale::EsEs,
        glyph: "🇪🇸",
        label: "Español",
    },
];

/// Returns the picker entry for `locale`, or the first entry if none matches.
pub fn current_language(locale: Locale) -> &'static LanguageOption {
    LANGUAGES
        .iter()
        .find(|option| option.locale == locale)
        .unwrap_or(&LANGUAGES[0])
}

/// Picker entries paired with whether each one is the active locale.
pub fn language_options(current: Locale) -> Vec<(LanguageOption, bool)> {
    LANGUAGES
        .iter()
        .map(|option| (*option, option.locale == current))
        .collect()
}
