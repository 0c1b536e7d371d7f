//! Date-times in an extended proleptic Gregorian calendar.
//!
//! [`WikibaseDate`] covers years from before the big bang to far beyond the
//! range of ordinary date libraries, converts to and from a signed count of
//! seconds since the Unix epoch in constant time, and reads and writes the
//! Wikibase date literal format (`+00000001970-01-01T00:00:00Z`).

/// Emits a `log::debug!` record when the `log` feature is enabled.
macro_rules! debug_log {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($args)+);
    };
}

mod calendar;
mod consts;
mod error;
mod format;
mod prelude;

pub use calendar::{civil_from_days, is_leap_year};
pub use consts::{
    DAYS_PER_MONTH, FEBRUARY_DAYS_LEAP, MAX_MONTH, MIN_DAY, SECONDS_PER_DAY, UNSPECIFIED,
    WIKIDATA_YEAR_DIGITS,
};
pub use error::{Component, ParseError, RangeError};
pub use format::ToStringFormat;

use std::fmt;
use std::str::FromStr;

use calendar::{days_from_civil, days_in_month};
use consts::{HOURS_PER_DAY, JANUARY, MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use serde::{Deserialize, Serialize};

/// An instant in the proleptic Gregorian calendar, in UTC, with astronomical
/// year numbering (year 0 is 1 BC).
///
/// A month or day of [`UNSPECIFIED`] records that the source only knew the
/// date to a coarser precision. Such values compare, format and parse as they
/// are, but must be [normalized](Self::normalize) before epoch conversion.
/// Equality is field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WikibaseDate {
    year:   i64,
    month:  u8,
    day:    u8,
    hour:   u8,
    minute: u8,
    second: u8,
}

impl WikibaseDate {
    /// Builds a date from its fields without validating them.
    pub const fn new(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of `year-month-day`
    pub const fn from_date(year: i64, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    pub const fn year(&self) -> i64 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Whether neither month nor day is the [`UNSPECIFIED`] sentinel
    pub const fn is_normalized(&self) -> bool {
        self.month != UNSPECIFIED && self.day != UNSPECIFIED
    }

    /// Replaces an unspecified month or day with 1, leaving every other field
    /// alone.
    pub const fn normalize(self) -> Self {
        Self {
            month: if self.month == UNSPECIFIED { JANUARY } else { self.month },
            day: if self.day == UNSPECIFIED { MIN_DAY } else { self.day },
            ..self
        }
    }

    /// Checks every field against its calendar bounds.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidComponent` for the first field out of range,
    /// which includes an unspecified month or day.
    pub const fn validate(&self) -> Result<(), RangeError> {
        if self.month == UNSPECIFIED || self.month > MAX_MONTH {
            return Err(RangeError::InvalidComponent {
                field: Component::Month,
                value: self.month,
            });
        }
        if self.day < MIN_DAY || self.day > days_in_month(self.year, self.month) {
            return Err(RangeError::InvalidComponent {
                field: Component::Day,
                value: self.day,
            });
        }
        if self.hour >= HOURS_PER_DAY {
            return Err(RangeError::InvalidComponent {
                field: Component::Hour,
                value: self.hour,
            });
        }
        if self.minute >= MINUTES_PER_HOUR {
            return Err(RangeError::InvalidComponent {
                field: Component::Minute,
                value: self.minute,
            });
        }
        if self.second >= SECONDS_PER_MINUTE {
            return Err(RangeError::InvalidComponent {
                field: Component::Second,
                value: self.second,
            });
        }
        Ok(())
    }

    /// 1-based ordinal of this date within its year.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidComponent` if the date fails
    /// [`validate`](Self::validate).
    pub fn day_of_year(&self) -> Result<u16, RangeError> {
        self.validate()?;
        Ok(calendar::day_of_year(self.year, self.month, self.day))
    }

    /// Seconds from 1970-01-01T00:00:00Z to this instant; negative before it.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidComponent` if the date fails
    /// [`validate`](Self::validate) (normalize first), and
    /// `RangeError::Overflow` if the count does not fit in an `i64`.
    pub fn seconds_since_epoch(&self) -> Result<i64, RangeError> {
        self.validate()?;

        let days = days_from_civil(self.year, self.month, self.day);
        let time_of_day = i128::from(self.hour) * i128::from(SECONDS_PER_HOUR)
            + i128::from(self.minute) * i128::from(SECONDS_PER_MINUTE)
            + i128::from(self.second);

        i64::try_from(days * i128::from(SECONDS_PER_DAY) + time_of_day).map_err(|_| {
            debug_log!("year {} overflows seconds since epoch", self.year);
            RangeError::Overflow { year: self.year }
        })
    }

    /// The instant `seconds` seconds after 1970-01-01T00:00:00Z. Total over
    /// `i64`.
    pub const fn from_seconds_since_epoch(seconds: i64) -> Self {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let time_of_day = seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            hour: (time_of_day / SECONDS_PER_HOUR) as u8,
            minute: (time_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE as i64) as u8,
            second: (time_of_day % SECONDS_PER_MINUTE as i64) as u8,
        }
    }

    /// Renders this date in the given shape.
    pub fn format(&self, format: ToStringFormat) -> String {
        format.format(self)
    }
}

impl FromStr for WikibaseDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse_literal(s)
    }
}

/// Writes the [`ToStringFormat::Wikidata`] form.
impl fmt::Display for WikibaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ToStringFormat::Wikidata))
    }
}

impl From<i64> for WikibaseDate {
    fn from(seconds: i64) -> Self {
        Self::from_seconds_since_epoch(seconds)
    }
}

impl TryFrom<WikibaseDate> for i64 {
    type Error = RangeError;

    fn try_from(date: WikibaseDate) -> Result<Self, Self::Error> {
        date.seconds_since_epoch()
    }
}

impl Serialize for WikibaseDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WikibaseDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
