//! HTTP client for the ISED callsign availability lookup
//!
//! One synchronous request/response exchange per query; no streaming, no
//! retries. The request timeout is explicit and configurable rather than
//! whatever the transport defaults to.

use std::time::Duration;

use crate::error::{CallwatchError, Result};
use crate::query::AvailabilityQuery;

/// Default ISED availability lookup endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://apc-cap.ic.gc.ca/pls/apc_anon/query_avail_cs$callsign.actionquery";

/// Configuration for the lookup client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Lookup endpoint URL (default: the ISED availability service)
    pub endpoint: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client wrapper for the availability lookup service
pub struct LookupClient {
    client: reqwest::Client,
    endpoint: String,
}

impl LookupClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns `Network` if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(CallwatchError::Network)?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// POST one availability query and return the raw results page
    ///
    /// # Arguments
    /// * `query` - The (prefix, suffix length) combination to look up
    ///
    /// # Returns
    /// The HTML results page as a string
    ///
    /// # Errors
    /// `Network` on DNS, connection, or timeout failures, and on any
    /// non-2xx response status
    pub async fn fetch_results_page(&self, query: &AvailabilityQuery) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&query.form_fields())
            .send()
            .await
            .map_err(CallwatchError::Network)?;

        let response = response
            .error_for_status()
            .map_err(CallwatchError::Network)?;

        response.text().await.map_err(CallwatchError::Network)
    }
}
