//! Built-in locale tables.

use crate::registry::LocaleEntry;

/// Locale tag of the English table.
pub const EN_US: &str = "en_US";

/// Locale tag of the Turkish table.
pub const TR_TR: &str = "tr_TR";

const EN_US_WORDS: [(&str, &str); 7] = [
    ("year", "year"),
    ("month", "month"),
    ("week", "week"),
    ("day", "day"),
    ("hour", "hour"),
    ("minute", "minute"),
    ("second", "second"),
];

const TR_TR_WORDS: [(&str, &str); 7] = [
    ("year", "yıl"),
    ("month", "ay"),
    ("week", "hafta"),
    ("day", "gün"),
    ("hour", "saat"),
    ("minute", "dakika"),
    ("second", "saniye"),
];

/// All built-in `(tag, entry)` pairs.
pub fn locales() -> impl Iterator<Item = (&'static str, LocaleEntry)> {
    [(EN_US, &EN_US_WORDS), (TR_TR, &TR_TR_WORDS)]
        .into_iter()
        .map(|(tag, words)| (tag, words.iter().copied().collect()))
}
