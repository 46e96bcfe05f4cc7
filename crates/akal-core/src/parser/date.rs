//! Parser for the calendar's `DD.MM.YYYY` date tokens.

use chrono::NaiveDate;

use crate::error::{AkalError, Result};

/// Parse a strict `DD.MM.YYYY` token into a calendar date.
///
/// Day and month must be two ASCII digits, the year four. Out-of-range
/// values such as `31.02.2024` are rejected rather than rolled over.
///
/// # Errors
/// Returns `AkalError::DateParse` with the offending token.
///
/// # Examples
/// ```
/// use akal_core::parser::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("29.02.2024").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(parse_date("29.02.2023").is_err());
/// assert!(parse_date("3.1.2024").is_err());
/// ```
pub fn parse_date(token: &str) -> Result<NaiveDate> {
    let invalid = || AkalError::DateParse(token.to_string());
    let bytes = token.as_bytes();

    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return Err(invalid());
    }

    let day = parse_digits(&bytes[0..2]).ok_or_else(invalid)?;
    let month = parse_digits(&bytes[3..5]).ok_or_else(invalid)?;
    let year = parse_digits(&bytes[6..10]).ok_or_else(invalid)?;

    let year = i32::try_from(year).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Format a date the way the calendar prints it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

fn parse_digits(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
