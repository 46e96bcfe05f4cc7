//! Main collection pipeline
//!
//! This module combines the fetcher with the parsers: it fetches the
//! calendar page for an address, selects the schedule rows and turns every
//! periodic row into a [`ScheduleEntry`].

use crate::address::Address;
use crate::client::{AkalClient, Fetcher};
use crate::error::Result;
use crate::parser::{extract_entry, select_rows, Document};
use crate::types::{ExtractionPolicy, ScheduleEntry};

/// Collection schedule pipeline
///
/// Holds no per-request state, so a single instance can serve concurrent
/// requests behind an `Arc`.
///
/// # Example
/// ```no_run
/// use akal_core::{Address, CollectionPipeline};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pipeline = CollectionPipeline::new()?;
///     let address = Address::new("Kaiserstraße", 12)?;
///
///     for entry in pipeline.run(&address).await? {
///         println!("{}: {} dates", entry.name, entry.dates.len());
///     }
///     Ok(())
/// }
/// ```
pub struct CollectionPipeline<F = AkalClient> {
    fetcher: F,
    policy: ExtractionPolicy,
}

impl CollectionPipeline<AkalClient> {
    /// Create a pipeline against the live calendar with the Karlsruhe policy.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(AkalClient::new()?, ExtractionPolicy::KARLSRUHE))
    }
}

impl<F: Fetcher> CollectionPipeline<F> {
    /// Create a pipeline with a custom fetcher and policy.
    ///
    /// This is useful for testing or when the client needs custom configuration.
    pub fn with_fetcher(fetcher: F, policy: ExtractionPolicy) -> Self {
        Self { fetcher, policy }
    }

    /// The extraction policy in use.
    pub fn policy(&self) -> ExtractionPolicy {
        self.policy
    }

    /// Fetch and extract the collection schedule for an address.
    ///
    /// # Returns
    /// * `Ok(Vec<ScheduleEntry>)` in upstream row order; rows that are not
    ///   periodic collections are skipped
    /// * `Err(AkalError::HttpError | UpstreamStatus)` if the upstream fetch fails
    /// * `Err(AkalError::MalformedDocument)` if the body is not markup
    #[tracing::instrument(skip(self, address), fields(street = %address.street, house_nr = address.house_nr))]
    pub async fn run(&self, address: &Address) -> Result<Vec<ScheduleEntry>> {
        let body = self.fetcher.fetch(address).await?;
        let entries = extract_schedule(&body, self.policy)?;
        tracing::debug!(entries = entries.len(), "extracted collection schedule");
        Ok(entries)
    }
}

/// Extract all schedule entries from a raw calendar page.
///
/// Row-local failures are logged and skipped; any other failure is returned.
pub fn extract_schedule(body: &[u8], policy: ExtractionPolicy) -> Result<Vec<ScheduleEntry>> {
    let document = Document::parse(body)?;
    let mut entries = Vec::new();

    for row in select_rows(&document)? {
        match extract_entry(&row, policy) {
            Ok(entry) => entries.push(entry),
            Err(e) if e.is_row_local() => tracing::debug!(error = %e, "skipping row"),
            Err(e) => return Err(e),
        }
    }
    Ok(entries)
}
