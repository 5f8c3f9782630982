//! Error types for the callsign watcher
//!
//! One enum covers the whole pipeline; an empty results page is not an
//! error and is represented by [`crate::parser::TableScan::Empty`] instead.

use thiserror::Error;

/// Error type for all callsign watcher operations
#[derive(Error, Debug)]
pub enum CallwatchError {
    /// The availability lookup failed at the transport layer
    ///
    /// Covers DNS, connection, timeout, and non-2xx responses.
    #[error("lookup request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The results page could not be parsed and the failure is not the
    /// recognized no-table condition
    #[error("failed to parse results page: {0}")]
    Parse(String),

    /// The mail session or send failed for one recipient
    #[error("email delivery failed: {0}")]
    Delivery(String),

    /// Configuration is missing or malformed
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for callsign watcher operations
pub type Result<T> = std::result::Result<T, CallwatchError>;
