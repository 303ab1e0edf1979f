//! Singular/plural selection.
//!
//! One rule for every locale: a count of exactly one keeps the word as-is,
//! anything else gets [`PLURAL_SUFFIX`] appended. Translated words are
//! suffixed the same way ("saat" becomes "saats").

use std::borrow::Cow;

/// Suffix appended to a unit word when the count is not one.
pub const PLURAL_SUFFIX: &str = "s";

/// Plural category of a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Exactly one.
    One,
    /// Zero, negative, or two and up.
    Other,
}

impl PluralCategory {
    /// Categorize a count.
    #[must_use]
    pub const fn for_count(count: i64) -> Self {
        if count == 1 { Self::One } else { Self::Other }
    }
}

/// Apply the plural suffix to `word` for the given count.
///
/// Borrows when no suffix is needed.
#[must_use]
pub fn pluralize(word: &str, count: i64) -> Cow<'_, str> {
    match PluralCategory::for_count(count) {
        PluralCategory::One => Cow::Borrowed(word),
        PluralCategory::Other => {
            let mut owned = String::with_capacity(word.len() + PLURAL_SUFFIX.len());
            owned.push_str(word);
            owned.push_str(PLURAL_SUFFIX);
            Cow::Owned(owned)
        }
    }
}
