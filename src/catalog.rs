//! Per-locale message catalogs

use serde::Deserialize;
use std::collections::HashMap;

/// Conventional key for the catalog's user-interface language tag.
pub const KEY_UI_LANGUAGE: &str = "ui_language";
/// Conventional key for the catalog's help-text language tag.
pub const KEY_HELP_LANGUAGE: &str = "help_language";
/// Conventional key for the catalog's content language tag.
pub const KEY_LANGUAGE: &str = "language";
/// Conventional key for the catalog's text direction (`ltr` or `rtl`).
pub const KEY_DIRECTION: &str = "direction";

/// One locale's mapping from message key to translated template string.
///
/// Catalogs are constructed once and never mutated. Template strings keep
/// their positional placeholders (`{0}`, `{1}`, …) exactly as authored; a
/// few metadata entries (language tag, text direction) live in the same
/// table as ordinary keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from a flat JSON object of string keys and values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the template string for a message key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Get the template string for a message key, or the key itself when
    /// absent.
    ///
    /// Source data guarantees key completeness, so a miss here means the
    /// caller and the shipped tables have drifted; echoing the key keeps the
    /// output greppable instead of panicking.
    pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Check whether a message key exists in this catalog.
    pub fn has_message(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Number of entries in this catalog, metadata included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether this catalog holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over all message keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// The catalog's language tag, if present.
    pub fn language_tag(&self) -> Option<&str> {
        self.get(KEY_LANGUAGE)
    }

    /// The catalog's text direction hint, if present.
    pub fn text_direction(&self) -> Option<&str> {
        self.get(KEY_DIRECTION)
    }
}
