//! Languages available for human-readable explanations.
//!
//! Bucket boundaries never depend on the locale; only the wording does.
//!
//! # Examples
//! ```
//! use saltglow_core::Locale;
//!
//! assert_eq!(Locale::English.as_str(), "en");
//! assert_eq!("zh".parse::<Locale>(), Ok(Locale::Chinese));
//! ```

use thiserror::Error;

/// Language of generated reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// English wording.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// Simplified Chinese wording.
    #[cfg_attr(feature = "serde", serde(rename = "zh"))]
    Chinese,
}

/// Error returned when a locale tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{tag}'")]
pub struct ParseLocaleError {
    /// Rejected tag.
    pub tag: String,
}

impl Locale {
    /// Return the short language tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "zh" | "zh-cn" | "chinese" => Ok(Self::Chinese),
            _ => Err(ParseLocaleError { tag: s.to_owned() }),
        }
    }
}
