//! Rate-limited email dispatch in front of a pluggable provider.

use super::{
    errors::{MailError, NotifyResult},
    models::{EmailMessage, EmailTemplates, EventSummary, OutgoingEmail},
    rate_limiter::{RateLimitConfig, SendWindow},
};
use async_trait::async_trait;
use tokio::{sync::Mutex, time::Instant};

/// Transactional email provider
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one rendered email.
    ///
    /// Return [`MailError::Throttled`] when the provider answers 429 so the
    /// dispatcher can back off and retry.
    async fn send(&self, email: &OutgoingEmail) -> NotifyResult<()>;
}

/// Mailer that only logs, for local runs without provider credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> NotifyResult<()> {
        log::info!(
            "Email '{}' to {}: {}",
            email.template_id,
            email.to_email,
            email.subject().unwrap_or_default()
        );
        Ok(())
    }
}

/// Outcome of a bulk cancellation send
#[derive(Debug, Default)]
pub struct CancellationReport {
    /// Recipients that were sent the notice
    pub sent: Vec<String>,
    /// Recipients that could not be reached, with the final error
    pub failed: Vec<(String, MailError)>,
}

impl CancellationReport {
    pub fn all_sent(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Owns the send window and retry policy for one mail provider
pub struct EmailDispatcher<M: Mailer> {
    mailer: M,
    templates: EmailTemplates,
    config: RateLimitConfig,
    window: Mutex<SendWindow>,
}

impl<M: Mailer> EmailDispatcher<M> {
    pub fn new(mailer: M, templates: EmailTemplates, config: RateLimitConfig) -> Self {
        let window = Mutex::new(SendWindow::new(&config));
        Self {
            mailer,
            templates,
            config,
            window,
        }
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Send one message, waiting out the local window and provider throttling.
    ///
    /// # Errors
    ///
    /// - [`MailError::InvalidRecipient`] if the address has no `@`
    /// - [`MailError::RetriesExhausted`] once `max_retries` retries are used
    /// - any non-throttle error from the mailer, immediately
    pub async fn send(&self, message: &EmailMessage) -> NotifyResult<()> {
        if !message.to_email().contains('@') {
            return Err(MailError::InvalidRecipient(message.to_email().to_string()));
        }

        let email = message.render(&self.templates);
        let mut retries = 0;

        loop {
            let admitted = self.window.lock().await.try_acquire(Instant::now());

            if admitted {
                match self.mailer.send(&email).await {
                    Ok(()) => return Ok(()),
                    Err(e) if e.is_retryable() => {
                        log::warn!("Provider throttled email to {}", email.to_email);
                    }
                    Err(e) => return Err(e),
                }
            } else {
                log::debug!("Send window full, delaying email to {}", email.to_email);
            }

            if retries >= self.config.max_retries {
                return Err(MailError::RetriesExhausted {
                    attempts: retries + 1,
                });
            }
            retries += 1;
            tokio::time::sleep(self.config.retry_delay).await;
        }
    }

    /// Tell every recipient an event is off, continuing past failures
    pub async fn send_cancellations(
        &self,
        recipients: &[String],
        event: &EventSummary,
    ) -> CancellationReport {
        let mut report = CancellationReport::default();

        for to_email in recipients {
            let message = EmailMessage::EventCancelled {
                to_email: to_email.clone(),
                event: event.clone(),
            };

            match self.send(&message).await {
                Ok(()) => report.sent.push(to_email.clone()),
                Err(e) => {
                    log::error!("Failed to send cancellation email to {}: {}", to_email, e);
                    report.failed.push((to_email.clone(), e));
                }
            }
        }

        report
    }
}
