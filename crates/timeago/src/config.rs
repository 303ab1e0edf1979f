//! Generator configuration.
//!
//! Plain values owned by the embedding application and handed to
//! [`TimeAgo::from_config`](crate::TimeAgo::from_config). Nothing here reads
//! the environment or the filesystem.
//!
//! | Key | Meaning | Default |
//! |-----|---------|---------|
//! | `default_locale` | Locale used when a call does not name one | `en_US` |
//!
//! Invalid values are reported as [`ConfigError`]s and the default is kept.

use tracing::warn;

use crate::settings::INITIAL_DEFAULT_LOCALE;

/// Lookup key for the default locale.
pub const KEY_DEFAULT_LOCALE: &str = "default_locale";

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAgoConfig {
    /// Locale used when a call does not name one.
    pub default_locale: String,
}

impl Default for TimeAgoConfig {
    fn default() -> Self {
        Self {
            default_locale: INITIAL_DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct TimeAgoConfigParse {
    pub config: TimeAgoConfig,
    pub errors: Vec<ConfigError>,
}

/// Rejected configuration value with field context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}={value:?} ({message})")]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl TimeAgoConfig {
    /// Build config from a caller-supplied key lookup (a parsed settings
    /// file, CLI flags, a map). Rejected values keep their defaults and are
    /// reported in the returned diagnostics.
    #[must_use]
    pub fn from_lookup<F>(mut get: F) -> TimeAgoConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = TimeAgoConfig::default();
        let mut errors = Vec::new();

        if let Some(value) = get(KEY_DEFAULT_LOCALE) {
            match parse_locale(&value) {
                Some(locale) => config.default_locale = locale,
                None => errors.push(ConfigError::new(
                    KEY_DEFAULT_LOCALE,
                    value,
                    "expected a non-empty locale tag without whitespace",
                )),
            }
        }

        for err in &errors {
            warn!(%err, "ignoring invalid timeago configuration");
        }
        TimeAgoConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        if parse_locale(&self.default_locale).is_some() {
            Ok(())
        } else {
            Err(vec![ConfigError::new(
                KEY_DEFAULT_LOCALE,
                self.default_locale.clone(),
                "expected a non-empty locale tag without whitespace",
            )])
        }
    }
}

fn parse_locale(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
