//! Karlsruhe Abfallkalender Core Library
//!
//! This crate scrapes the municipal waste collection calendar of Karlsruhe
//! (<https://web6.karlsruhe.de/service/abfall/akal/akal.php>) and turns it
//! into typed schedule entries.
//!
//! # Features
//! - Validate street / house number queries
//! - Fetch the calendar page with a bounded request timeout
//! - Extract `(name, period, dates)` records from the loosely structured rows
//! - Parse the calendar's `DD.MM.YYYY` dates

pub mod address;
pub mod client;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod types;

// Re-export main types for convenience
pub use address::Address;
pub use client::{AkalClient, ClientConfig, Fetcher};
pub use error::{AkalError, Result};
pub use pipeline::{extract_schedule, CollectionPipeline};
pub use types::{ExtractionPolicy, ScheduleEntry};
