//! Email error types.

use thiserror::Error;

/// Email dispatch errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// Provider answered 429
    #[error("Email provider is throttling requests")]
    Throttled,

    /// Gave up after retrying throttled sends
    #[error("Max retries exceeded after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// Any other provider or network failure
    #[error("Email transport error: {0}")]
    Transport(String),

    /// Recipient address is unusable
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
}

impl MailError {
    /// Whether waiting and sending again might succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Throttled)
    }
}

/// Result type for email operations
pub type NotifyResult<T> = Result<T, MailError>;
