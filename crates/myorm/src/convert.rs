//! Conversions for the text values returned in a [`Row`](crate::row::Row).

use crate::error::{OrmError, OrmResult};
use chrono::NaiveDateTime;

/// Layout of a `DATETIME(3)` value: `2006-01-02 15:04:05.000`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S.%3f";

/// Parse a `YYYY-MM-DD HH:MM:SS.mmm` string.
///
/// ```
/// use myorm::convert::parse_datetime;
///
/// let t = parse_datetime("2024-03-01 12:30:45.250").unwrap();
/// assert_eq!(t.to_string(), "2024-03-01 12:30:45.250");
/// assert!(parse_datetime("2024-03-01 12:30:45").is_err());
/// ```
pub fn parse_datetime(value: &str) -> OrmResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|e| OrmError::parse(value, e))
}

/// Parse a base-10 unsigned 32-bit integer. Only ASCII digits are accepted.
pub fn parse_u32(value: &str) -> OrmResult<u32> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OrmError::parse(value, "expected decimal digits only"));
    }
    value.parse::<u32>().map_err(|e| OrmError::parse(value, e))
}
