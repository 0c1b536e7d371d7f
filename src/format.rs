//! Text codec for Wikibase date literals and their ISO 8601 style relatives.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    ParseError, WikibaseDate,
    consts::{DATE_SEPARATOR, TIME_DESIGNATOR, TIME_SEPARATOR, UTC_DESIGNATOR, WIKIDATA_YEAR_DIGITS},
    prelude::*,
};

/// `[+-]year-month-day[Thour:minute[:second]][Z]`
///
/// The sign gets its own group ahead of the year digits so a leading `-` is
/// never mistaken for the year/month separator.
#[allow(clippy::expect_used)]
static DATE_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<sign>[+-])?(?P<year>[0-9]+)-(?P<month>[0-9]+)-(?P<day>[0-9]+)(?:T(?P<hour>[0-9]+):(?P<minute>[0-9]+)(?::(?P<second>[0-9]+))?)?Z?$",
    )
    .expect("date literal pattern is valid")
});

/// Output shapes understood by [`WikibaseDate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum ToStringFormat {
    /// `+00000001970-01-01T00:00:00Z`
    #[default]
    #[display(fmt = "WIKIDATA")]
    Wikidata,
    /// `1970-01-01T00:00:00Z`
    #[display(fmt = "DATE_TIME")]
    DateTime,
    /// `1970-01-01`
    #[display(fmt = "DATE")]
    Date,
}

impl ToStringFormat {
    pub const ALL: [Self; 3] = [Self::Wikidata, Self::DateTime, Self::Date];

    /// Renders `date` in this shape. Fields are written as stored, sentinels
    /// included.
    pub fn format(self, date: &WikibaseDate) -> String {
        let date_part = match self {
            Self::Wikidata => {
                let sign = if date.year() < 0 { '-' } else { '+' };
                format!(
                    "{sign}{:0width$}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
                    date.year().unsigned_abs(),
                    date.month(),
                    date.day(),
                    width = WIKIDATA_YEAR_DIGITS,
                )
            },
            Self::DateTime | Self::Date => format!(
                "{}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
                date.year(),
                date.month(),
                date.day()
            ),
        };

        match self {
            Self::Date => date_part,
            Self::Wikidata | Self::DateTime => format!(
                "{date_part}{TIME_DESIGNATOR}{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}{UTC_DESIGNATOR}",
                date.hour(),
                date.minute(),
                date.second()
            ),
        }
    }
}

impl FromStr for ToStringFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownFormat(s.to_owned()))
    }
}

/// Parses any of the emitted shapes, plus literals missing seconds, the time,
/// or the trailing `Z`, and fields without zero padding.
pub(crate) fn parse_literal(s: &str) -> Result<WikibaseDate, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let reject = || {
        debug_log!("rejected date literal {s:?}");
        ParseError::InvalidFormat(s.to_owned())
    };

    let caps = DATE_LITERAL.captures(trimmed).ok_or_else(reject)?;

    // The signed slice, so `-9223372036854775808` parses without negating
    let year_start = caps.name("sign").or_else(|| caps.name("year")).map_or(0, |m| m.start());
    let year_end = caps.name("year").map_or(0, |m| m.end());
    let year = trimmed[year_start..year_end]
        .parse::<i64>()
        .map_err(|_| reject())?;

    let field = |caps: &Captures<'_>, name: &str| -> Result<u8, ParseError> {
        caps.name(name)
            .map_or(Ok(0), |m| m.as_str().parse::<u8>())
            .map_err(|_| reject())
    };

    Ok(WikibaseDate::new(
        year,
        field(&caps, "month")?,
        field(&caps, "day")?,
        field(&caps, "hour")?,
        field(&caps, "minute")?,
        field(&caps, "second")?,
    ))
}
