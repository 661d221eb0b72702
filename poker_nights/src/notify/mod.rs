//! Invitation and cancellation emails.
//!
//! Delivery goes through an external transactional email provider behind the
//! [`Mailer`] trait. The [`EmailDispatcher`] owns the send window and retry
//! policy; create one per provider and share it by reference.
//!
//! ## Example
//!
//! ```no_run
//! use poker_nights::notify::{
//!     EmailDispatcher, EmailMessage, EmailTemplates, LogMailer, RateLimitConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher =
//!         EmailDispatcher::new(LogMailer, EmailTemplates::from_env(), RateLimitConfig::from_env());
//!
//!     dispatcher
//!         .send(&EmailMessage::GroupInvite {
//!             to_email: "cy@example.com".to_string(),
//!             group_name: "Thursday Crew".to_string(),
//!             inviter_name: "Ana".to_string(),
//!             link: "https://example.com/groups/g1".to_string(),
//!             reply_to: "ana@example.com".to_string(),
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod dispatcher;
pub mod errors;
pub mod models;
pub mod rate_limiter;

pub use dispatcher::{CancellationReport, EmailDispatcher, LogMailer, Mailer};
pub use errors::{MailError, NotifyResult};
pub use models::{APP_NAME, EmailMessage, EmailTemplates, EventSummary, NO_REPLY, OutgoingEmail};
pub use rate_limiter::{RateLimitConfig, SendWindow};
