//! Data types for the Abfallkalender scraper
//!
//! All output types implement Serialize and Deserialize for JSON responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One waste stream and its upcoming collection days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Name of the waste stream (e.g. "Restmüll"), never empty
    pub name: String,
    /// Collection frequency or category (e.g. "14-täglich"), if the row has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Collection days in the order the upstream page lists them
    pub dates: Vec<NaiveDate>,
}

/// Rules deciding which rows become schedule entries
///
/// The upstream markup has been scraped under two different policies:
/// one accepting rows without a period, one requiring it. Pick a policy
/// explicitly when building a pipeline instead of mixing both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionPolicy {
    /// Minimum number of `", "` separated tokens in the name cell.
    /// `1` accepts rows without a period, `2` makes the period mandatory.
    pub min_tokens: usize,
    /// Drop entries whose date listing yields no valid date
    pub require_dates: bool,
}

impl ExtractionPolicy {
    /// Policy used against the Karlsruhe calendar: period optional,
    /// at least one resolved collection date.
    pub const KARLSRUHE: Self = Self {
        min_tokens: 1,
        require_dates: true,
    };
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self::KARLSRUHE
    }
}
