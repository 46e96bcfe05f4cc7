//! Error types for the Abfallkalender scraper
//!
//! This module defines all error types used throughout the library.
//! AkalError implements Serialize so the HTTP layer can embed it in JSON bodies.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for Abfallkalender operations
#[derive(Error, Debug)]
pub enum AkalError {
    /// Request parameters were missing or malformed (client fault)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network failure or timeout while talking to the upstream calendar
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with something other than 200 OK
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    /// Upstream body could not be read as an HTML document
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A row does not describe a periodic collection
    #[error("Not a periodical collection: {0}")]
    NotPeriodical(String),

    /// A date token is not a valid `DD.MM.YYYY` calendar date
    #[error("Invalid date: {0}")]
    DateParse(String),
}

impl AkalError {
    /// Errors caused by the caller's request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Errors caused by the upstream source, reported as a server-side failure.
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::UpstreamStatus(_) | Self::MalformedDocument(_)
        )
    }

    /// Errors scoped to a single row or date token. The pipeline recovers
    /// from these by skipping; they never reach the caller.
    pub fn is_row_local(&self) -> bool {
        matches!(self, Self::NotPeriodical(_) | Self::DateParse(_))
    }
}

/// Serialize AkalError as its display string
impl Serialize for AkalError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Abfallkalender operations
pub type Result<T> = std::result::Result<T, AkalError>;
