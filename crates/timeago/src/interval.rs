//! Time units and the descending interval table.
//!
//! Months and years are fixed-length approximations (30 and 365 days).

use std::fmt;
use std::str::FromStr;

const SECOND: i64 = 1;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// A granularity used to express elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Every unit, largest first.
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Length of one unit in seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        match self {
            Unit::Year => YEAR,
            Unit::Month => MONTH,
            Unit::Week => WEEK,
            Unit::Day => DAY,
            Unit::Hour => HOUR,
            Unit::Minute => MINUTE,
            Unit::Second => SECOND,
        }
    }

    /// Translation key (and fallback display word).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// Translation keys of every unit, largest first.
    #[must_use]
    pub fn keys() -> [&'static str; 7] {
        Self::ALL.map(Unit::key)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unrecognized unit key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time unit: {0:?}")]
pub struct ParseUnitError(pub String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.key() == s)
            .ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

static INTERVALS: [(Unit, i64); 7] = [
    (Unit::Year, YEAR),
    (Unit::Month, MONTH),
    (Unit::Week, WEEK),
    (Unit::Day, DAY),
    (Unit::Hour, HOUR),
    (Unit::Minute, MINUTE),
    (Unit::Second, SECOND),
];

/// The decomposition basis: `(unit, seconds_per_unit)`, strictly descending,
/// ending with `(Second, 1)`.
#[must_use]
pub fn units_descending() -> &'static [(Unit, i64)] {
    &INTERVALS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        let expected: [(&str, i64); 7] = [
            ("year", 31_536_000),
            ("month", 2_592_000),
            ("week", 604_800),
            ("day", 86_400),
            ("hour", 3_600),
            ("minute", 60),
            ("second", 1),
        ];
        let actual: Vec<(&str, i64)> = units_descending()
            .iter()
            .map(|&(unit, secs)| (unit.key(), secs))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn table_strictly_descending_and_ends_at_one() {
        let table = units_descending();
        assert!(table.windows(2).all(|w| w[0].1 > w[1].1));
        assert_eq!(table.last(), Some(&(Unit::Second, 1)));
    }

    #[test]
    fn table_matches_unit_seconds() {
        for &(unit, secs) in units_descending() {
            assert_eq!(unit.seconds(), secs);
        }
        assert_eq!(
            units_descending().iter().map(|(u, _)| *u).collect::<Vec<_>>(),
            Unit::ALL
        );
    }

    #[test]
    fn parse_and_display() {
        for unit in Unit::ALL {
            assert_eq!(unit.to_string().parse::<Unit>(), Ok(unit));
        }
        assert_eq!(
            "fortnight".parse::<Unit>(),
            Err(ParseUnitError("fortnight".into()))
        );
        assert!("Year".parse::<Unit>().is_err());
    }
}
