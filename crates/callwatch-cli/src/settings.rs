//! Environment-driven configuration for the watcher binary
//!
//! Everything is read once at startup. Required: `SMTP_USERNAME`,
//! `SMTP_PASSWORD`, `RECIPIENTS`. Everything else has a default matching
//! the VE3/VA3 two-letter watch the service was built for.

use std::env;

use callwatch_core::{
    CallwatchError, CheckSpec, ClientConfig, Recipient, Result, SmtpConfig, SuffixLength,
    WatchConfig,
};

/// Default pause between matrix runs (one day)
pub const DEFAULT_INTERVAL_SECS: u64 = 60 * 60 * 24;

/// Everything the binary needs, resolved from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Mail submission endpoint and credentials
    pub smtp: SmtpConfig,
    /// Recipients, checks, and time zone
    pub watch: WatchConfig,
    /// Lookup endpoint and timeout
    pub client: ClientConfig,
    /// Seconds between matrix runs
    pub interval_secs: u64,
    /// Run the matrix once and exit instead of looping
    pub run_once: bool,
}

impl Settings {
    /// Resolve settings from the process environment
    ///
    /// # Errors
    /// `Config` when a required variable is missing or a value is malformed
    pub fn from_env() -> Result<Self> {
        let username = required("SMTP_USERNAME")?;
        let password = required("SMTP_PASSWORD")?;

        let mut smtp = SmtpConfig::new(username, password);
        if let Ok(host) = env::var("SMTP_HOST") {
            smtp.host = host;
        }
        if let Ok(port) = env::var("SMTP_PORT") {
            smtp.port = parse_number(&port, "SMTP_PORT")?;
        }
        if let Ok(sender) = env::var("SMTP_SENDER") {
            smtp.sender = sender;
        }

        let recipients = parse_recipients(&required("RECIPIENTS")?)?;
        let prefixes = env::var("PREFIXES").unwrap_or_else(|_| "VE3,VA3".to_string());
        let letters = env::var("SUFFIX_LETTERS").unwrap_or_else(|_| "2".to_string());
        let checks = parse_checks(&prefixes, &letters)?;

        let timezone = match env::var("TIMEZONE") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| CallwatchError::Config(format!("unknown time zone '{raw}': {e}")))?,
            Err(_) => chrono_tz::America::Toronto,
        };

        let mut client = ClientConfig::default();
        if let Ok(endpoint) = env::var("LOOKUP_ENDPOINT") {
            client.endpoint = endpoint;
        }
        if let Ok(timeout) = env::var("LOOKUP_TIMEOUT_SECS") {
            client.timeout_secs = parse_number(&timeout, "LOOKUP_TIMEOUT_SECS")?;
        }

        let interval_secs = match env::var("CHECK_INTERVAL_SECS") {
            Ok(raw) => parse_number(&raw, "CHECK_INTERVAL_SECS")?,
            Err(_) => DEFAULT_INTERVAL_SECS,
        };
        let run_once = parse_flag(env::var("RUN_ONCE").ok().as_deref());

        Ok(Self {
            smtp,
            watch: WatchConfig {
                timezone,
                recipients,
                checks,
            },
            client,
            interval_secs,
            run_once,
        })
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| CallwatchError::Config(format!("{name} environment variable not set")))
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| CallwatchError::Config(format!("{name} is not a valid number: '{raw}'")))
}

/// Interpret an optional boolean-ish variable; `0`, `false`, and an empty
/// value all count as unset
fn parse_flag(raw: Option<&str>) -> bool {
    match raw {
        None => false,
        Some(value) => !matches!(value.trim(), "" | "0" | "false" | "FALSE" | "False"),
    }
}

/// Parse a `Name:email,Name:email` recipient list
fn parse_recipients(raw: &str) -> Result<Vec<Recipient>> {
    let recipients = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, email) = entry.split_once(':').ok_or_else(|| {
                CallwatchError::Config(format!("recipient '{entry}' is not in name:email form"))
            })?;
            let (name, email) = (name.trim(), email.trim());
            if name.is_empty() || email.is_empty() {
                return Err(CallwatchError::Config(format!(
                    "recipient '{entry}' is missing a name or address"
                )));
            }
            Ok(Recipient::new(name, email))
        })
        .collect::<Result<Vec<_>>>()?;

    if recipients.is_empty() {
        return Err(CallwatchError::Config(
            "RECIPIENTS must name at least one recipient".to_string(),
        ));
    }
    Ok(recipients)
}

fn parse_suffix_length(raw: &str) -> Result<SuffixLength> {
    match raw.trim() {
        "2" => Ok(SuffixLength::Two),
        "3" => Ok(SuffixLength::Three),
        other => Err(CallwatchError::Config(format!(
            "SUFFIX_LETTERS entries must be 2 or 3, got '{other}'"
        ))),
    }
}

/// Build the check matrix as the cross product of prefixes and suffix lengths
fn parse_checks(prefixes: &str, letters: &str) -> Result<Vec<CheckSpec>> {
    let lengths = letters
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_suffix_length)
        .collect::<Result<Vec<_>>>()?;

    let mut checks = Vec::new();
    for prefix in prefixes.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        for &suffix_length in &lengths {
            checks.push(CheckSpec::new(prefix, suffix_length));
        }
    }

    if checks.is_empty() {
        return Err(CallwatchError::Config(
            "PREFIXES and SUFFIX_LETTERS produced no checks".to_string(),
        ));
    }
    Ok(checks)
}
