//! HTML parsers for the Abfallkalender page
//!
//! This module contains the extraction pipeline stages:
//! - `rows`: Parse the document and select schedule rows
//! - `entry`: Turn a row into a schedule entry
//! - `date`: Parse `DD.MM.YYYY` date tokens

pub mod date;
pub mod entry;
pub mod rows;

// Re-export main parsing functions
pub use date::{format_date, parse_date};
pub use entry::{extract_dates, extract_entry};
pub use rows::{select_rows, Document, RawRow};
