#![forbid(unsafe_code)]

//! Relative-time phrases: turn a past Unix timestamp into "3 hours ago".
//!
//! # Primary responsibilities
//! - **Interval table**: seven fixed units, year down to second.
//! - **TimeAgo**: picks the coarsest unit with a non-zero count, translates
//!   it through a [`LocaleRegistry`], and appends the plural suffix.
//! - **Clock**: injectable source of "now" for deterministic output.
//! - **DefaultLocale**: the locale used when a call does not name one.
//!
//! The free functions [`generate`], [`set_default_locale`], and
//! [`default_locale`] act on one process-wide [`TimeAgo`], built on first
//! use with the built-in locales and an `en_US` default. Only
//! [`set_default_locale`] changes that default. Applications that want their
//! own registry, clock, or starting locale build a [`TimeAgo`] directly,
//! optionally from a [`TimeAgoConfig`].

pub mod clock;
pub mod config;
pub mod generator;
pub mod interval;
pub mod settings;

use std::sync::OnceLock;

pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use config::{ConfigError, KEY_DEFAULT_LOCALE, TimeAgoConfig, TimeAgoConfigParse};
pub use generator::{Elapsed, TimeAgo, format_elapsed};
pub use interval::{ParseUnitError, Unit, units_descending};
pub use settings::DefaultLocale;
pub use timeago_i18n::{LocaleEntry, LocaleRegistry};

/// The process-wide generator.
pub fn global() -> &'static TimeAgo {
    static GLOBAL: OnceLock<TimeAgo> = OnceLock::new();
    GLOBAL.get_or_init(TimeAgo::new)
}

/// Phrase for `timestamp` using the process-wide generator.
#[must_use]
pub fn generate(timestamp: i64, locale: Option<&str>) -> String {
    global().generate(timestamp, locale)
}

/// Set the process-wide default locale.
pub fn set_default_locale(locale: impl Into<String>) {
    global().set_default_locale(locale);
}

/// The process-wide default locale.
#[must_use]
pub fn default_locale() -> String {
    global().default_locale()
}
