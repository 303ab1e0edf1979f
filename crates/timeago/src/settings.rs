//! Default-locale slot.
//!
//! A single locale tag read by the generator whenever a call does not name
//! one. Owned by the embedding application and shared by `Arc`; setting it
//! never validates the tag against the registry.

use std::sync::{PoisonError, RwLock};

use timeago_i18n::builtin::EN_US;
use tracing::debug;

/// Locale used before anything else is configured.
pub const INITIAL_DEFAULT_LOCALE: &str = EN_US;

/// Single-slot locale setting.
#[derive(Debug)]
pub struct DefaultLocale {
    slot: RwLock<String>,
}

impl Default for DefaultLocale {
    fn default() -> Self {
        Self::new(INITIAL_DEFAULT_LOCALE)
    }
}

impl DefaultLocale {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(locale.into()),
        }
    }

    /// Current default locale tag.
    #[must_use]
    pub fn get(&self) -> String {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrite the default locale tag.
    pub fn set(&self, locale: impl Into<String>) {
        let locale = locale.into();
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *slot, locale);
        debug!(from = %previous, to = %slot.as_str(), "default locale changed");
    }

    /// Run `f` with the current tag without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        f(slot.as_str())
    }
}
