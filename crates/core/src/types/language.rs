//! Storefront languages and bilingual display text.

use serde::{Deserialize, Serialize};

/// UI language of the storefront.
///
/// Arabic is the storefront default; the header switch toggles between the
/// two supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (default).
    #[default]
    Ar,
    /// English.
    En,
}

impl Language {
    /// Two-letter code used in persisted preferences and view parameters.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            _ => Err(format!("invalid language code: {s}")),
        }
    }
}

/// A display string carried in both storefront languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Arabic rendition.
    pub ar: String,
    /// English rendition.
    pub en: String,
}

impl LocalizedText {
    /// Create a localized string from both renditions.
    #[must_use]
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// The rendition for `language`.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }
}
