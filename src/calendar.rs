//! Proleptic Gregorian calendar arithmetic over signed astronomical years.
//!
//! Day counts are computed in closed form from 400 year eras so the cost is
//! constant no matter how far a year is from the epoch. Years are shifted to
//! start on March 1st, which puts the leap day at the end of each computational
//! year and removes the February special case from the formulas.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_MONTH, DAYS_TO_UNIX_EPOCH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH,
};

/// Whether `year` is a leap year.
///
/// Uses euclidean remainders, so year 0, -4 and -400 are leap years while -100
/// is not, mirroring the rule going forward in time.
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Number of days in `month` of `year`. `month` must be in `1..=12`.
pub(crate) const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_PER_MONTH[month as usize - 1]
    }
}

/// 1-based ordinal of `day` within `year`: the days of every completed month
/// before `month`, plus `day`.
pub(crate) fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let completed: u16 = (1..month)
        .map(|m| u16::from(days_in_month(year, m)))
        .sum();
    completed + u16::from(day)
}

/// Signed number of days from 1970-01-01 to `year-month-day`.
///
/// The result is an `i128` because `year * 365` alone leaves `i64` for years
/// near the type's limits. Callers narrow it.
pub(crate) const fn days_from_civil(year: i64, month: u8, day: u8) -> i128 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    // January and February belong to the previous March-based year
    let year = year as i128 - if month <= FEBRUARY { 1 } else { 0 };
    let era = year.div_euclid(GREGORIAN_CYCLE as i128);
    let year_of_era = year - era * GREGORIAN_CYCLE as i128;
    let shifted_month = (month as i128 + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i128 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_GREGORIAN_CYCLE as i128 + day_of_era - DAYS_TO_UNIX_EPOCH as i128
}

/// Inverse of [`days_from_civil`]: the `(year, month, day)` that lies `days`
/// days after 1970-01-01. Total over every `i64` day count that comes from an
/// `i64` count of seconds.
pub const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let days = days as i128 + DAYS_TO_UNIX_EPOCH as i128;
    let era = days.div_euclid(DAYS_PER_GREGORIAN_CYCLE as i128);
    let day_of_era = days - era * DAYS_PER_GREGORIAN_CYCLE as i128;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;

    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u8;
    let year = year_of_era + era * GREGORIAN_CYCLE as i128 + if month <= FEBRUARY { 1 } else { 0 };

    (year as i64, month, day)
}
