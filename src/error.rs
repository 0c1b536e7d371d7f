use crate::prelude::*;

/// Error returned when text is not a date literal or an output format name.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unknown output format: {_0} (expected WIKIDATA, DATE_TIME or DATE)")]
    UnknownFormat(String),
}

impl std::error::Error for ParseError {}

/// The date-time field a [`RangeError::InvalidComponent`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Component {
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

/// Error type for epoch conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The instant does not fit in a signed 64-bit count of seconds.
    #[error("Year {year} is out of range for seconds since epoch")]
    Overflow { year: i64 },

    /// A field is outside its calendar bounds (includes unnormalized sentinels).
    #[error("Invalid {field}: {value}")]
    InvalidComponent { field: Component, value: u8 },
}
