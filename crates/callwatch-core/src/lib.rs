//! Callsign availability watcher core library
//!
//! Watches the ISED amateur callsign availability lookup for callsigns
//! matching a prefix and suffix-length pattern, and emails a digest of
//! whatever is listed to each configured recipient.
//!
//! # Overview
//!
//! The pipeline for one (prefix, suffix length, recipient) combination is
//! fetch → scan → format → send:
//! - [`LookupClient`] posts the wildcarded availability query
//! - [`scan_results_table`] flattens the first HTML table into callsigns,
//!   tagging a table-less page as [`TableScan::Empty`] rather than an error
//! - [`format_digest`] renders a deterministic subject and body
//! - a [`Mailer`] delivers exactly one message per non-empty result
//!
//! An empty result produces no email and no side effect beyond a log line.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use callwatch_core::{
//!     CallsignWatcher, LookupClient, Recipient, Result, SmtpConfig, SmtpMailer, WatchConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = LookupClient::new()?;
//!     let mailer = Arc::new(SmtpMailer::new(SmtpConfig::new("user@example.org", "secret")));
//!
//!     let mut config = WatchConfig::default();
//!     config.recipients.push(Recipient::new("Amin", "ve3hmm@example.org"));
//!
//!     let watcher = CallsignWatcher::new(client, mailer, config);
//!     let report = watcher.run_matrix().await;
//!     println!("{} digests delivered", report.delivered());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod digest;
mod error;
mod mailer;
pub mod parser;
mod query;
mod watcher;

// Re-export client types
pub use client::{ClientConfig, DEFAULT_ENDPOINT, LookupClient};

// Re-export configuration types
pub use config::{CheckSpec, Recipient, SmtpConfig, WatchConfig};

// Re-export digest types
pub use digest::{Digest, DigestContent, format_digest};

// Re-export error types
pub use error::{CallwatchError, Result};

// Re-export delivery seam
pub use mailer::{Mailer, SmtpMailer};

// Re-export parser results
pub use parser::{TableScan, scan_results_table};

// Re-export query types
pub use query::{AvailabilityQuery, SuffixLength};

// Re-export watcher API
pub use watcher::{CallsignWatcher, CheckOutcome, CheckResult, RunReport};
