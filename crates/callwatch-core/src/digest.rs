//! Digest construction and formatting
//!
//! Rendering is a pure function of the digest, so scheduled runs on
//! different hosts produce identical wording for the same instant: the
//! timestamp carries its own fixed time zone.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::Recipient;
use crate::query::SuffixLength;

/// One availability digest addressed to a single recipient
///
/// Only constructed when at least one callsign was extracted; an empty
/// result set never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    /// Instant of the check, localized to the configured zone
    pub timestamp: DateTime<Tz>,

    /// Suffix length the check was constrained to
    pub suffix_length: SuffixLength,

    /// Callsigns in table scan order, duplicates preserved
    pub call_signs: Vec<String>,

    /// Who this digest is addressed to
    pub recipient: Recipient,
}

/// Rendered subject and body for one digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestContent {
    /// Subject line naming the suffix length and the short-form date
    pub subject: String,

    /// Plain-text body with one bullet line per callsign
    pub body: String,
}

/// Render the digest email
///
/// Deterministic: identical inputs always produce byte-identical text.
/// Callsigns are listed in input order with no sorting or deduplication.
pub fn format_digest(digest: &Digest) -> DigestContent {
    let letters = digest.suffix_length.as_form_value();

    let short_date = digest.timestamp.format("%d/%m/%y");
    let subject = format!("{letters}-letter callsigns available on {short_date}!");

    let formatted_time = digest.timestamp.format("%A %B %d, %Y at %I:%M%p");
    let delimited_signs = digest
        .call_signs
        .iter()
        .map(|call_sign| format!("* {call_sign}"))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "Hi {}, as you requested, there may be {letters}-letter callsign available. \
         Your options on {formatted_time} are:\n{delimited_signs}",
        digest.recipient.first_name,
    );

    DigestContent { subject, body }
}
