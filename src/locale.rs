//! Locale identifiers and resource-suffix computation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language code, optionally paired with a country code, identifying a
/// translation variant. Immutable value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// The only country code that ever contributes to a resource suffix.
    ///
    /// Catalogs are keyed by language alone (`_ca`, `_es`, `_it`) except for
    /// this one reserved code, which keeps Traditional Chinese (`_zh_TW`)
    /// distinct. The narrow scope is deliberate; no other locale family gets
    /// region-level disambiguation.
    pub const REGION_SUFFIX_COUNTRY: &'static str = "TW";

    /// Create a locale from a language code alone.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            country: None,
        }
    }

    /// Create a locale from a language and country pair.
    pub fn with_country(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            country: Some(country.into().to_uppercase()),
        }
    }

    /// Get the language code for this locale
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the country code for this locale, if any
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Compute the resource suffix for this locale.
    ///
    /// The suffix is `_<language>`, extended with `_<country>` only when the
    /// country is [`Self::REGION_SUFFIX_COUNTRY`]:
    ///
    /// ```rust
    /// use xpath_i18n::Locale;
    ///
    /// assert_eq!(Locale::with_country("ca", "ES").suffix(), "_ca");
    /// assert_eq!(Locale::with_country("zh", "TW").suffix(), "_zh_TW");
    /// ```
    pub fn suffix(&self) -> String {
        let mut suffix = format!("_{}", self.language);
        if self.country.as_deref() == Some(Self::REGION_SUFFIX_COUNTRY) {
            suffix.push('_');
            suffix.push_str(Self::REGION_SUFFIX_COUNTRY);
        }
        suffix
    }

    /// Parse a POSIX locale string such as `ca_ES.UTF-8` or `it_IT@euro`.
    ///
    /// The codeset and modifier parts are discarded. Returns `None` for the
    /// `C` and `POSIX` pseudo-locales and for anything without a language
    /// part.
    pub fn from_posix(value: &str) -> Option<Self> {
        let base = value.split(['.', '@']).next().unwrap_or_default();
        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }

        let mut parts = base.split('_');
        let language = parts.next().filter(|s| !s.is_empty())?;
        match parts.next() {
            Some(country) if !country.is_empty() => Some(Self::with_country(language, country)),
            _ => Some(Self::new(language)),
        }
    }

    /// Detect the locale from the process environment.
    ///
    /// Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in that order, returning
    /// the first value that parses as a POSIX locale string.
    pub fn from_env() -> Option<Self> {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(value) = std::env::var(var) {
                if let Some(locale) = Self::from_posix(&value) {
                    return Some(locale);
                }
            }
        }
        None
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => write!(f, "{}", self.language),
        }
    }
}
