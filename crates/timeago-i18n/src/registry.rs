//! Locale registry with literal-key fallback.
//!
//! # Invariants
//!
//! 1. **Lookups never fail**: [`LocaleRegistry::translate`] returns the
//!    translated word when the locale defines it, and the lookup key itself
//!    otherwise. The fallback is per key, never to another locale.
//!
//! 2. **Thread safety**: `LocaleRegistry` is `Send + Sync`; share it behind
//!    an `Arc` once built.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing locale | Tag not registered | `translate` returns the key |
//! | Missing key | Locale lacks a unit | `translate` returns the key |
//! | Bad locale JSON | Not a flat string map | `I18nError::Parse` |
//! | Duplicate tag | `try_add_locale` on a known tag | `I18nError::DuplicateLocale` |
//! | Empty tag | Blank tag via `try_add_locale` / `add_locale_json` | `I18nError::InvalidLocale` |
//! | Empty tag | Blank tag via `add_locale` | Stored as given (unchecked) |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builtin;

/// Locale identifier (e.g., `"en_US"`, `"tr_TR"`). Opaque; never parsed.
pub type Locale = String;

/// Errors from locale registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    /// A locale tag was empty or blank.
    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),
    /// Locale data could not be parsed.
    #[error("parse error in locale '{locale}': {message}")]
    Parse { locale: String, message: String },
    /// The tag is already registered.
    #[error("locale '{0}' is already registered")]
    DuplicateLocale(String),
}

/// Unit-name translations for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleEntry {
    words: HashMap<String, String>,
}

impl LocaleEntry {
    /// Create an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of `key -> word`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Insert a translated word.
    pub fn insert(&mut self, key: impl Into<String>, word: impl Into<String>) {
        self.words.insert(key.into(), word.into());
    }

    /// Look up a translated word.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.words.get(key).map(String::as_str)
    }

    /// Number of translated words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the entry has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all keys in this entry.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleEntry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Mapping from locale tag to its unit-name translations.
///
/// # Example
///
/// ```
/// use timeago_i18n::registry::LocaleRegistry;
///
/// let mut registry = LocaleRegistry::builtin();
/// assert_eq!(registry.translate("tr_TR", "hour"), "saat");
/// assert_eq!(registry.translate("xx_XX", "hour"), "hour");
///
/// registry
///     .add_locale_json("es_ES", r#"{"hour": "hora"}"#)
///     .unwrap();
/// assert_eq!(registry.translate("es_ES", "hour"), "hora");
/// assert_eq!(registry.translate("es_ES", "day"), "day");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    locales: HashMap<Locale, LocaleEntry>,
}

impl LocaleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in locales.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (tag, entry) in builtin::locales() {
            registry.add_locale(tag, entry);
        }
        registry
    }

    /// Add or replace the entry for a locale.
    ///
    /// Unchecked: any tag is stored as given, including a blank one. Use
    /// [`try_add_locale`](Self::try_add_locale) or
    /// [`add_locale_json`](Self::add_locale_json) to reject blank tags.
    pub fn add_locale(&mut self, locale: impl Into<String>, entry: LocaleEntry) {
        let locale = locale.into();
        let words = entry.len();
        if self.locales.insert(locale.clone(), entry).is_some() {
            debug!(locale = %locale, words, "replaced locale entry");
        } else {
            debug!(locale = %locale, words, "registered locale entry");
        }
    }

    /// Add an entry for a locale that is not registered yet.
    pub fn try_add_locale(
        &mut self,
        locale: impl Into<String>,
        entry: LocaleEntry,
    ) -> Result<(), I18nError> {
        let locale = locale.into();
        if locale.trim().is_empty() {
            return Err(I18nError::InvalidLocale(locale));
        }
        if self.locales.contains_key(&locale) {
            return Err(I18nError::DuplicateLocale(locale));
        }
        self.add_locale(locale, entry);
        Ok(())
    }

    /// Parse a flat JSON object and add or replace the locale's entry.
    pub fn add_locale_json(
        &mut self,
        locale: impl Into<String>,
        json: &str,
    ) -> Result<(), I18nError> {
        let locale = locale.into();
        if locale.trim().is_empty() {
            return Err(I18nError::InvalidLocale(locale));
        }
        let entry = LocaleEntry::from_json(json).map_err(|err| I18nError::Parse {
            locale: locale.clone(),
            message: err.to_string(),
        })?;
        self.add_locale(locale, entry);
        Ok(())
    }

    /// Whether the locale is registered.
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// The entry registered for a locale.
    #[must_use]
    pub fn entry(&self, locale: &str) -> Option<&LocaleEntry> {
        self.locales.get(locale)
    }

    /// Look up a translated word. `None` if the locale or key is missing.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales.get(locale).and_then(|entry| entry.get(key))
    }

    /// Translate a key, falling back to the key itself.
    #[must_use]
    pub fn translate<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        self.get(locale, key).unwrap_or(key)
    }

    /// All registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Keys from `reference_keys` that `locale` does not translate, sorted.
    #[must_use]
    pub fn missing_keys(&self, locale: &str, reference_keys: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| self.get(locale, key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Coverage of `reference_keys` across every registered locale.
    #[must_use]
    pub fn coverage_report(&self, reference_keys: &[&str]) -> CoverageReport {
        let total = reference_keys.len();
        let locales = self
            .locales()
            .into_iter()
            .map(|tag| {
                let missing = self.missing_keys(tag, reference_keys);
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale: tag.to_string(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

/// How completely each locale translates a reference key set.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Size of the reference key set.
    pub total_keys: usize,
    /// Per-locale coverage, sorted by tag.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Whether every locale translates every reference key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|lc| lc.missing.is_empty())
    }
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    /// Locale tag.
    pub locale: String,
    /// Number of reference keys translated.
    pub present: usize,
    /// Reference keys without a translation.
    pub missing: Vec<String>,
    /// Coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}
