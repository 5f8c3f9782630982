//! Periodic driver for the callsign availability watcher
//!
//! Loads configuration from the environment (a local `.env` file is honored),
//! builds the watcher, and runs the configured check matrix on an interval.
//! With `RUN_ONCE` set, the matrix runs a single time and the process exits;
//! a failed combination never aborts a run, it only shows up in the report.

mod settings;

use std::sync::Arc;
use std::time::Duration;

use callwatch_core::{CallsignWatcher, LookupClient, Result, SmtpMailer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_env()?;

    let client = LookupClient::with_config(settings.client.clone())?;
    let mailer = Arc::new(SmtpMailer::new(settings.smtp.clone()));
    let watcher = CallsignWatcher::new(client, mailer, settings.watch.clone());

    info!(
        checks = settings.watch.checks.len(),
        recipients = settings.watch.recipients.len(),
        timezone = %settings.watch.timezone,
        "watcher configured"
    );

    loop {
        let report = watcher.run_matrix().await;
        info!(
            combinations = report.outcomes.len(),
            delivered = report.delivered(),
            failures = report.failures(),
            "run complete"
        );

        if settings.run_once {
            break;
        }
        tokio::time::sleep(Duration::from_secs(settings.interval_secs)).await;
    }

    Ok(())
}
