/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, and the value month/day sentinels normalize to
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Month or day value meaning "not recorded at this precision"
pub const UNSPECIFIED: u8 = 0;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a non-leap year, indexed by `month - 1`
pub const DAYS_PER_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
/// Days in one full 400 year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const DAYS_TO_UNIX_EPOCH: i64 = 719_468;

pub const HOURS_PER_DAY: u8 = 24;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const SECONDS_PER_MINUTE: u8 = 60;

pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Digits the year magnitude is zero-padded to in the Wikibase literal form
pub const WIKIDATA_YEAR_DIGITS: usize = 11;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separates the date part from the time part
pub const TIME_DESIGNATOR: char = 'T';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Trailing UTC marker
pub const UTC_DESIGNATOR: char = 'Z';
