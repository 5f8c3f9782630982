//! Watcher configuration
//!
//! Loaded once at process start, read-only thereafter, and passed into the
//! watcher at construction; never reloaded mid-run.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::query::SuffixLength;

/// Someone who receives availability digests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Name used in the digest greeting (e.g. "Amin")
    pub first_name: String,

    /// Email address digests are delivered to
    pub email: String,
}

impl Recipient {
    /// Create a new recipient
    pub fn new(first_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
        }
    }
}

/// One (prefix, suffix length) combination to check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpec {
    /// Callsign prefix (e.g. "VE3", "VA3")
    pub prefix: String,

    /// Suffix length constraint for the check
    pub suffix_length: SuffixLength,
}

impl CheckSpec {
    /// Create a new check specification
    pub fn new(prefix: impl Into<String>, suffix_length: SuffixLength) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_length,
        }
    }
}

/// Full watcher configuration
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Time zone digests are timestamped in, independent of the host zone
    pub timezone: Tz,

    /// Recipients of every digest, attempted in order
    pub recipients: Vec<Recipient>,

    /// Combinations checked each run, in order
    pub checks: Vec<CheckSpec>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::Toronto,
            recipients: Vec::new(),
            checks: vec![
                CheckSpec::new("VE3", SuffixLength::Two),
                CheckSpec::new("VA3", SuffixLength::Two),
            ],
        }
    }
}

/// Mail submission endpoint and credentials
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// Submission host (default: "smtp.mailgun.org")
    pub host: String,

    /// Submission port (default: 587, STARTTLS)
    pub port: u16,

    /// Account username, also the default sender address
    pub username: String,

    /// Account password
    pub password: String,

    /// `From` address on outgoing digests
    pub sender: String,
}

impl SmtpConfig {
    /// Create a config for the default submission host with the sender set
    /// to the account username
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            host: "smtp.mailgun.org".to_string(),
            port: 587,
            sender: username.clone(),
            username,
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_config_default_checks() {
        let config = WatchConfig::default();
        assert_eq!(config.timezone, chrono_tz::America::Toronto);
        assert_eq!(
            config.checks,
            vec![
                CheckSpec::new("VE3", SuffixLength::Two),
                CheckSpec::new("VA3", SuffixLength::Two),
            ]
        );
        assert!(config.recipients.is_empty());
    }

    #[test]
    fn test_smtp_config_sender_defaults_to_username() {
        let config = SmtpConfig::new("postmaster@example.org", "hunter2");
        assert_eq!(config.host, "smtp.mailgun.org");
        assert_eq!(config.port, 587);
        assert_eq!(config.sender, "postmaster@example.org");
    }

    #[test]
    fn test_recipient_serialization_round_trip() {
        let recipient = Recipient::new("Amin", "ve3hmm@example.org");

        let json = serde_json::to_string(&recipient).expect("Serialization should succeed");
        let deserialized: Recipient =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(recipient, deserialized);
    }
}
