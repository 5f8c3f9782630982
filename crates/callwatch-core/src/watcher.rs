//! High-level watcher API
//!
//! Combines the lookup client, table parser, digest formatter, and mailer
//! into the check pipeline. Building a watcher performs no work; checks run
//! only when explicitly invoked, one combination at a time.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::client::LookupClient;
use crate::config::{Recipient, WatchConfig};
use crate::digest::Digest;
use crate::error::Result;
use crate::mailer::Mailer;
use crate::parser::{TableScan, scan_results_table};
use crate::query::{AvailabilityQuery, SuffixLength};

/// What happened for one (check, recipient) combination
#[derive(Debug)]
pub enum CheckOutcome {
    /// The page listed these callsigns and a digest was delivered
    Delivered {
        /// Callsigns in table order, as mailed
        call_signs: Vec<String>,
    },
    /// No results table: nothing available, no mail sent
    NothingAvailable,
}

/// One entry of a matrix run
#[derive(Debug)]
pub struct CheckResult {
    /// Prefix that was checked
    pub prefix: String,
    /// Suffix length the check was constrained to
    pub suffix_length: SuffixLength,
    /// Recipient the digest was addressed to
    pub recipient: Recipient,
    /// Outcome or error for this combination
    pub outcome: Result<CheckOutcome>,
}

/// Result of one full matrix run
///
/// One entry per (check, recipient) pair in configuration order; an error in
/// one entry never aborts later entries.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-combination outcomes in execution order
    pub outcomes: Vec<CheckResult>,
}

impl RunReport {
    /// Number of combinations that delivered a digest
    pub fn delivered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|r| matches!(r.outcome, Ok(CheckOutcome::Delivered { .. })))
            .count()
    }

    /// Number of combinations that failed
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|r| r.outcome.is_err()).count()
    }
}

/// Availability watcher combining client, parser, formatter, and mailer
pub struct CallsignWatcher {
    client: LookupClient,
    mailer: Arc<dyn Mailer>,
    config: WatchConfig,
}

impl CallsignWatcher {
    /// Build a watcher; no check runs until one is explicitly invoked
    pub fn new(client: LookupClient, mailer: Arc<dyn Mailer>, config: WatchConfig) -> Self {
        Self {
            client,
            mailer,
            config,
        }
    }

    /// Run one availability check for one combination and recipient
    ///
    /// Fetches the results page, scans it for the callsign table, and — only
    /// when callsigns are present — formats and delivers one digest. An
    /// empty result logs and returns [`CheckOutcome::NothingAvailable`]
    /// without any side effect.
    ///
    /// # Errors
    /// `Network` if the lookup fails, `Parse` on an unrecognized page
    /// structure, `Delivery` if the send fails
    pub async fn check_one(
        &self,
        prefix: &str,
        suffix_length: SuffixLength,
        recipient: &Recipient,
    ) -> Result<CheckOutcome> {
        let query = AvailabilityQuery::new(prefix, suffix_length);
        let page = self.client.fetch_results_page(&query).await?;

        let call_signs = match scan_results_table(&page)? {
            TableScan::Empty => {
                info!(prefix, "no callsigns available");
                return Ok(CheckOutcome::NothingAvailable);
            }
            TableScan::Rows(call_signs) => call_signs,
        };

        let digest = Digest {
            timestamp: Utc::now().with_timezone(&self.config.timezone),
            suffix_length,
            call_signs: call_signs.clone(),
            recipient: recipient.clone(),
        };
        self.mailer.send(&digest).await?;

        Ok(CheckOutcome::Delivered { call_signs })
    }

    /// Run every configured check against every recipient, sequentially
    ///
    /// Each combination's result or error is collected into the report; a
    /// failure for one combination is logged and never stops the rest of
    /// the batch.
    pub async fn run_matrix(&self) -> RunReport {
        let mut report = RunReport::default();

        for check in &self.config.checks {
            for recipient in &self.config.recipients {
                let outcome = self
                    .check_one(&check.prefix, check.suffix_length, recipient)
                    .await;

                if let Err(e) = &outcome {
                    error!(
                        prefix = %check.prefix,
                        recipient = %recipient.email,
                        "check failed: {e}"
                    );
                }

                report.outcomes.push(CheckResult {
                    prefix: check.prefix.clone(),
                    suffix_length: check.suffix_length,
                    recipient: recipient.clone(),
                    outcome,
                });
            }
        }

        report
    }
}
