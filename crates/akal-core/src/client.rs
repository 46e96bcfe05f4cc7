//! HTTP client for the Karlsruhe Abfallkalender
//!
//! This module provides the [`Fetcher`] seam used by the pipeline and its
//! production implementation backed by `reqwest`. Every request carries a
//! timeout so a hung upstream cannot hold a request slot indefinitely.

use std::time::Duration;

use async_trait::async_trait;

use crate::address::Address;
use crate::error::{AkalError, Result};

/// Upstream calendar endpoint
pub const AKAL_BASE_URL: &str = "https://web6.karlsruhe.de/service/abfall/akal/akal.php";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for German content
const DEFAULT_ACCEPT_LANGUAGE: &str = "de-DE,de;q=0.9,en;q=0.8";

/// Source of raw calendar pages
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw HTML body of the calendar page for `address`.
    async fn fetch(&self, address: &Address) -> Result<Vec<u8>>;
}

/// Configuration for the Abfallkalender HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Calendar endpoint (default: [`AKAL_BASE_URL`])
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent upstream
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: AKAL_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for the Abfallkalender
///
/// The underlying `reqwest::Client` pools connections and is safe to share
/// between concurrent requests.
pub struct AkalClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    base_url: String,
}

impl AkalClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Build the calendar URL for an address.
    ///
    /// The street is percent-encoded so names with reserved characters
    /// (`&`, `#`, spaces, umlauts) produce a well-formed query.
    pub fn request_url(&self, address: &Address) -> String {
        format!(
            "{}?strasse={}&hausnr={}",
            self.base_url,
            urlencoding::encode(&address.street),
            address.house_nr
        )
    }
}

#[async_trait]
impl Fetcher for AkalClient {
    /// # Errors
    /// - `AkalError::HttpError` - Network error or timeout
    /// - `AkalError::UpstreamStatus` - Server answered with anything but 200
    ///
    /// The body is returned as UTF-8 regardless of the upstream charset.
    async fn fetch(&self, address: &Address) -> Result<Vec<u8>> {
        let url = self.request_url(address);
        tracing::debug!(%url, "fetching collection calendar");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "upstream request failed");
            AkalError::HttpError(e)
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "upstream returned error status");
            return Err(AkalError::UpstreamStatus(status.as_u16()));
        }

        // Decodes per the Content-Type charset, so the body handed on is UTF-8
        Ok(response.text().await?.into_bytes())
    }
}
