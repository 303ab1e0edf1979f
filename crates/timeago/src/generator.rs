//! Phrase generation.
//!
//! # Algorithm
//!
//! 1. `delta = now - timestamp` (saturating).
//! 2. Negative delta (a future timestamp) yields `""`.
//! 3. Walk [`units_descending`] and keep the first unit whose whole count is
//!    non-zero. A zero delta matches nothing and ends on `(Second, 0)`.
//! 4. Translate the unit key for the locale, falling back to the key itself.
//! 5. Append the plural suffix unless the count is exactly one.
//! 6. Render `"<count> <word> ago"`.
//!
//! # Failure Modes
//!
//! | Condition | Output |
//! |-----------|--------|
//! | Future timestamp | `""` |
//! | Zero delta | `"0 seconds ago"` |
//! | Unknown locale | Untranslated unit key, e.g. `"3 days ago"` |
//! | Empty locale argument | Treated as no locale (default is used) |

use std::sync::Arc;

use timeago_i18n::{LocaleRegistry, pluralize};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::config::TimeAgoConfig;
use crate::interval::{Unit, units_descending};
use crate::settings::DefaultLocale;

/// Elapsed time expressed in its coarsest non-zero unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub unit: Unit,
    pub count: i64,
}

impl Elapsed {
    /// Decompose a delta in seconds. `None` when `delta` is negative.
    #[must_use]
    pub fn from_delta(delta: i64) -> Option<Self> {
        if delta < 0 {
            return None;
        }
        let elapsed = units_descending()
            .iter()
            .map(|&(unit, secs)| Elapsed {
                unit,
                count: delta / secs,
            })
            .find(|e| e.count != 0)
            .unwrap_or(Elapsed {
                unit: Unit::Second,
                count: 0,
            });
        Some(elapsed)
    }
}

/// Render an [`Elapsed`] as `"<count> <word> ago"` in `locale`.
#[must_use]
pub fn format_elapsed(registry: &LocaleRegistry, elapsed: Elapsed, locale: &str) -> String {
    let key = elapsed.unit.key();
    let word = match registry.get(locale, key) {
        Some(word) => word,
        None => {
            debug!(locale, key, "no translation, using unit key");
            key
        }
    };
    format!("{} {} ago", elapsed.count, pluralize(word, elapsed.count))
}

/// Relative-time phrase generator.
///
/// # Example
///
/// ```
/// use timeago::{FixedClock, TimeAgo};
///
/// let now = 1_700_000_000;
/// let timeago = TimeAgo::new().with_clock(FixedClock(now));
///
/// assert_eq!(timeago.generate(now - 7200, None), "2 hours ago");
/// assert_eq!(timeago.generate(now - 7200, Some("tr_TR")), "2 saats ago");
/// assert_eq!(timeago.generate(now + 1, None), "");
///
/// timeago.set_default_locale("tr_TR");
/// assert_eq!(timeago.generate(now - 86_400, None), "1 gün ago");
/// ```
#[derive(Debug)]
pub struct TimeAgo<C: Clock = SystemClock> {
    registry: Arc<LocaleRegistry>,
    default_locale: Arc<DefaultLocale>,
    clock: C,
}

impl Default for TimeAgo<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeAgo<SystemClock> {
    /// Built-in locales, `en_US` default, system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&TimeAgoConfig::default())
    }

    /// Built-in locales and system clock, default locale from `config`.
    #[must_use]
    pub fn from_config(config: &TimeAgoConfig) -> Self {
        Self::with_parts(
            Arc::new(LocaleRegistry::builtin()),
            Arc::new(DefaultLocale::new(config.default_locale.clone())),
            SystemClock,
        )
    }
}

impl<C: Clock> TimeAgo<C> {
    /// Assemble a generator from shared parts.
    #[must_use]
    pub fn with_parts(
        registry: Arc<LocaleRegistry>,
        default_locale: Arc<DefaultLocale>,
        clock: C,
    ) -> Self {
        Self {
            registry,
            default_locale,
            clock,
        }
    }

    /// Swap the clock.
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> TimeAgo<D> {
        TimeAgo {
            registry: self.registry,
            default_locale: self.default_locale,
            clock,
        }
    }

    /// Swap the locale registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<LocaleRegistry>) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Shared handle to the default-locale slot.
    #[must_use]
    pub fn default_locale_handle(&self) -> &Arc<DefaultLocale> {
        &self.default_locale
    }

    /// Current default locale.
    #[must_use]
    pub fn default_locale(&self) -> String {
        self.default_locale.get()
    }

    /// Change the locale used by calls that do not name one.
    pub fn set_default_locale(&self, locale: impl Into<String>) {
        self.default_locale.set(locale);
    }

    /// Phrase for `timestamp` relative to the clock's current time.
    #[must_use]
    pub fn generate(&self, timestamp: i64, locale: Option<&str>) -> String {
        self.generate_at(self.clock.now(), timestamp, locale)
    }

    /// Phrase for `timestamp` relative to an explicit `now`.
    #[must_use]
    pub fn generate_at(&self, now: i64, timestamp: i64, locale: Option<&str>) -> String {
        let delta = now.saturating_sub(timestamp);
        let Some(elapsed) = Elapsed::from_delta(delta) else {
            trace!(now, timestamp, "timestamp is in the future");
            return String::new();
        };

        let phrase = match locale.filter(|l| !l.is_empty()) {
            Some(locale) => format_elapsed(&self.registry, elapsed, locale),
            None => self
                .default_locale
                .with(|locale| format_elapsed(&self.registry, elapsed, locale)),
        };
        trace!(delta, unit = %elapsed.unit, count = elapsed.count, %phrase, "generated phrase");
        phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    const NOW: i64 = 1_700_000_000;

    fn timeago() -> TimeAgo<FixedClock> {
        TimeAgo::new().with_clock(FixedClock(NOW))
    }

    fn ago(delta: i64) -> String {
        timeago().generate(NOW - delta, None)
    }

    #[test]
    fn seconds() {
        assert_eq!(ago(1), "1 second ago");
        assert_eq!(ago(2), "2 seconds ago");
        assert_eq!(ago(59), "59 seconds ago");
    }

    #[test]
    fn unit_boundaries_are_exact() {
        assert_eq!(ago(60), "1 minute ago");
        assert_eq!(ago(3599), "59 minutes ago");
        assert_eq!(ago(3600), "1 hour ago");
        assert_eq!(ago(86_399), "23 hours ago");
        assert_eq!(ago(86_400), "1 day ago");
        assert_eq!(ago(604_799), "6 days ago");
        assert_eq!(ago(604_800), "1 week ago");
        assert_eq!(ago(2_591_999), "4 weeks ago");
        assert_eq!(ago(2_592_000), "1 month ago");
        assert_eq!(ago(31_535_999), "12 months ago");
        assert_eq!(ago(31_536_000), "1 year ago");
        assert_eq!(ago(10 * 31_536_000), "10 years ago");
    }

    #[test]
    fn zero_delta_is_zero_seconds() {
        assert_eq!(ago(0), "0 seconds ago");
        assert_eq!(
            Elapsed::from_delta(0),
            Some(Elapsed {
                unit: Unit::Second,
                count: 0
            })
        );
    }

    #[test]
    fn future_is_empty() {
        assert_eq!(ago(-1), "");
        assert_eq!(timeago().generate(i64::MAX, None), "");
        assert_eq!(Elapsed::from_delta(-1), None);
    }

    #[test]
    fn extreme_timestamps_do_not_panic() {
        let phrase = timeago().generate(i64::MIN, None);
        assert!(phrase.ends_with(" years ago"), "{phrase}");
        let at_min = timeago().generate_at(i64::MIN, i64::MAX, None);
        assert_eq!(at_min, "");
    }

    #[test]
    fn turkish_words_take_english_suffix() {
        let t = timeago();
        assert_eq!(t.generate(NOW - 7200, Some("tr_TR")), "2 saats ago");
        assert_eq!(t.generate(NOW - 3600, Some("tr_TR")), "1 saat ago");
        assert_eq!(t.generate(NOW - 31_536_000, Some("tr_TR")), "1 yıl ago");
    }

    #[test]
    fn unknown_locale_uses_unit_key() {
        let t = timeago();
        assert_eq!(t.generate(NOW - 3 * 86_400, Some("xx_XX")), "3 days ago");
        assert_eq!(t.generate(NOW - 86_400, Some("xx_XX")), "1 day ago");
    }

    #[test]
    fn empty_locale_means_default() {
        let t = timeago();
        t.set_default_locale("tr_TR");
        assert_eq!(t.generate(NOW - 60, Some("")), "1 dakika ago");
    }

    #[test]
    fn default_locale_applies_to_implicit_calls_only() {
        let t = timeago();
        let explicit = t.generate(NOW - 7200, Some("en_US"));
        t.set_default_locale("tr_TR");
        assert_eq!(t.default_locale(), "tr_TR");
        assert_eq!(t.generate(NOW - 7200, None), "2 saats ago");
        assert_eq!(t.generate(NOW - 7200, Some("en_US")), explicit);
    }

    #[test]
    fn builtin_locales_translate_every_unit() {
        let report = LocaleRegistry::builtin().coverage_report(&Unit::keys());
        assert!(report.is_complete(), "{report:?}");
    }

    #[test]
    fn format_elapsed_directly() {
        let registry = LocaleRegistry::builtin();
        let elapsed = Elapsed {
            unit: Unit::Week,
            count: 3,
        };
        assert_eq!(format_elapsed(&registry, elapsed, "tr_TR"), "3 haftas ago");
        assert_eq!(format_elapsed(&registry, elapsed, "en_US"), "3 weeks ago");
    }

    #[test]
    fn custom_registry() {
        let mut registry = LocaleRegistry::builtin();
        registry
            .add_locale_json("es_ES", r#"{"hour": "hora"}"#)
            .unwrap();
        let t = timeago().with_registry(Arc::new(registry));
        assert_eq!(t.generate(NOW - 7200, Some("es_ES")), "2 horas ago");
        assert_eq!(t.generate(NOW - 120, Some("es_ES")), "2 minutes ago");
    }

    #[test]
    fn shared_default_locale_slot() {
        let slot = Arc::new(DefaultLocale::default());
        let registry = Arc::new(LocaleRegistry::builtin());
        let a = TimeAgo::with_parts(Arc::clone(&registry), Arc::clone(&slot), FixedClock(NOW));
        let b = TimeAgo::with_parts(registry, Arc::clone(&slot), FixedClock(NOW));
        a.set_default_locale("tr_TR");
        assert_eq!(b.generate(NOW - 1, None), "1 saniye ago");
        assert_eq!(slot.get(), "tr_TR");
    }
}
