//! Schedule entry extraction
//!
//! Turns one schedule row into a [`ScheduleEntry`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex_lite::Regex;

use crate::error::{AkalError, Result};
use crate::types::{ExtractionPolicy, ScheduleEntry};

use super::date::parse_date;
use super::rows::RawRow;

/// Separator between name and period in the label cell.
pub const LABEL_SEPARATOR: &str = ", ";

/// Upper bound on date markers read from a single row.
pub const MAX_DATES_PER_ROW: usize = 100;

static DATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"den (\d+\.\d+\.\d+)").expect("date marker pattern is valid"));

/// Extract a schedule entry from a row.
///
/// # Arguments
/// * `row` - Row with the icon, label and dates cells
/// * `policy` - Which rows count as periodic collections
///
/// # Returns
/// * `Ok(ScheduleEntry)` for a periodic collection row
/// * `Err(AkalError::NotPeriodical)` if the label has fewer tokens than
///   `policy.min_tokens`, the name is empty, or `policy.require_dates`
///   is set and no date could be resolved
pub fn extract_entry(row: &RawRow<'_>, policy: ExtractionPolicy) -> Result<ScheduleEntry> {
    let label = row.label_text();
    let tokens: Vec<&str> = label.split(LABEL_SEPARATOR).map(str::trim).collect();
    let present = tokens.iter().filter(|token| !token.is_empty()).count();

    if present < policy.min_tokens {
        return Err(AkalError::NotPeriodical(format!(
            "expected at least {} label tokens in {:?}",
            policy.min_tokens,
            label.trim()
        )));
    }

    let name = tokens[0];
    if name.is_empty() {
        return Err(AkalError::NotPeriodical("empty name".to_string()));
    }

    let period = tokens
        .get(1)
        .filter(|period| !period.is_empty())
        .map(|period| period.to_string());

    let dates = extract_dates(&row.dates_text());
    if policy.require_dates && dates.is_empty() {
        return Err(AkalError::NotPeriodical(format!("no collection dates for {name}")));
    }

    Ok(ScheduleEntry {
        name: name.to_string(),
        period,
        dates,
    })
}

/// Collect the dates of every `den DD.MM.YYYY` marker in `text`.
///
/// Markers whose token is not a valid date are skipped. At most
/// [`MAX_DATES_PER_ROW`] markers are read.
///
/// # Examples
/// ```
/// use akal_core::parser::extract_dates;
///
/// let dates = extract_dates("Mi. den 03.01.2024, Mi. den 31.02.2024, Mi. den 17.01.2024");
/// assert_eq!(dates.len(), 2);
/// ```
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    DATE_MARKER
        .captures_iter(text)
        .take(MAX_DATES_PER_ROW)
        .filter_map(|caps| {
            let token = caps.get(1)?.as_str();
            match parse_date(token) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::debug!(error = %e, "dropping date token");
                    None
                }
            }
        })
        .collect()
}
