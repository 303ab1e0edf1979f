#![forbid(unsafe_code)]

//! Locale data for timeago phrases.
//!
//! Provides a registry of per-locale unit-name translations with literal-key
//! fallback, the built-in locale tables, and the singular/plural suffix rule.

pub mod builtin;
pub mod plural;
pub mod registry;

pub use plural::{PLURAL_SUFFIX, PluralCategory, pluralize};
pub use registry::{
    CoverageReport, I18nError, Locale, LocaleCoverage, LocaleEntry, LocaleRegistry,
};
