//! Email delivery for availability digests
//!
//! The [`Mailer`] trait is the seam between the pipeline and the transport;
//! production uses SMTP, tests substitute recording fakes.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::SmtpConfig;
use crate::digest::{Digest, format_digest};
use crate::error::{CallwatchError, Result};

/// Delivery seam for digests
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send exactly one message for `digest` to its recipient
    ///
    /// # Errors
    /// `Delivery` on authentication or transport failure; a failure for one
    /// recipient must not affect later sends
    async fn send(&self, digest: &Digest) -> Result<()>;
}

/// SMTP mailer against a fixed submission host
///
/// A fresh authenticated session is opened inside each [`Mailer::send`] call
/// and dropped when the call returns, success or failure, so sessions are
/// never reused across recipients and cannot leak on error.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a mailer for the given submission endpoint and credentials
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );

        let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
            .map_err(|e| CallwatchError::Delivery(e.to_string()))?;

        Ok(builder
            .port(self.config.port)
            .credentials(credentials)
            .build())
    }

    fn build_message(&self, digest: &Digest) -> Result<Message> {
        let content = format_digest(digest);

        let from = self
            .config
            .sender
            .parse()
            .map_err(|e| CallwatchError::Delivery(format!("invalid sender address: {e}")))?;
        let to = digest
            .recipient
            .email
            .parse()
            .map_err(|e| CallwatchError::Delivery(format!("invalid recipient address: {e}")))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(content.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(content.body)
            .map_err(|e| CallwatchError::Delivery(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, digest: &Digest) -> Result<()> {
        let message = self.build_message(digest)?;

        // Session scope: built here, dropped on return either way
        let transport = self.transport()?;
        transport
            .send(message)
            .await
            .map_err(|e| CallwatchError::Delivery(e.to_string()))?;

        info!(recipient = %digest.recipient.email, "digest delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Recipient;
    use crate::query::SuffixLength;
    use chrono::TimeZone;

    fn sample_digest(email: &str) -> Digest {
        Digest {
            timestamp: chrono_tz::America::Toronto
                .with_ymd_and_hms(2024, 3, 5, 14, 30, 0)
                .unwrap(),
            suffix_length: SuffixLength::Two,
            call_signs: vec!["VE3AB".to_string()],
            recipient: Recipient::new("Amin", email),
        }
    }

    // Building the transport spawns the pool's reaper task, so this needs
    // a runtime even though nothing connects.
    #[tokio::test]
    async fn test_transport_creation() {
        let mailer = SmtpMailer::new(SmtpConfig::new("postmaster@example.org", "hunter2"));
        assert!(mailer.transport().is_ok());
    }

    #[test]
    fn test_build_message_addresses_recipient() {
        let mailer = SmtpMailer::new(SmtpConfig::new("postmaster@example.org", "hunter2"));
        let message = mailer.build_message(&sample_digest("ve3hmm@example.org"));
        assert!(message.is_ok());
    }

    #[test]
    fn test_build_message_invalid_recipient_is_delivery_error() {
        let mailer = SmtpMailer::new(SmtpConfig::new("postmaster@example.org", "hunter2"));
        let result = mailer.build_message(&sample_digest("not an address"));

        match result {
            Err(CallwatchError::Delivery(msg)) => {
                assert!(msg.contains("recipient"));
            }
            _ => panic!("Expected Delivery error"),
        }
    }

    #[test]
    fn test_build_message_invalid_sender_is_delivery_error() {
        let mut config = SmtpConfig::new("postmaster@example.org", "hunter2");
        config.sender = "broken sender".to_string();
        let mailer = SmtpMailer::new(config);
        let result = mailer.build_message(&sample_digest("ve3hmm@example.org"));

        match result {
            Err(CallwatchError::Delivery(msg)) => {
                assert!(msg.contains("sender"));
            }
            _ => panic!("Expected Delivery error"),
        }
    }
}
