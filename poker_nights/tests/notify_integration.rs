//! Integration tests for email dispatch
//!
//! A recording mailer stands in for the provider; time is paused so the
//! send window and retry delays can be checked exactly.

use async_trait::async_trait;
use poker_nights::notify::{
    EmailDispatcher, EmailMessage, EmailTemplates, EventSummary, MailError, Mailer, NotifyResult,
    OutgoingEmail, RateLimitConfig,
};
use std::sync::{
    Mutex,
    atomic::{AtomicU32, Ordering},
};
use tokio::time::{Duration, Instant};

/// Records every delivery attempt, throttling the first `throttle_first`
/// calls and bouncing any address containing "bounce"
struct RecordingMailer {
    started: Instant,
    throttle_first: u32,
    calls: AtomicU32,
    delivered: Mutex<Vec<(String, Duration)>>,
}

impl RecordingMailer {
    fn new(throttle_first: u32) -> Self {
        Self {
            started: Instant::now(),
            throttle_first,
            calls: AtomicU32::new(0),
            delivered: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn delivered(&self) -> Vec<(String, Duration)> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> NotifyResult<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.throttle_first {
            return Err(MailError::Throttled);
        }
        if email.to_email.contains("bounce") {
            return Err(MailError::Transport("mailbox unavailable".to_string()));
        }

        self.delivered
            .lock()
            .unwrap()
            .push((email.to_email.clone(), self.started.elapsed()));
        Ok(())
    }
}

fn dispatcher(throttle_first: u32) -> EmailDispatcher<RecordingMailer> {
    EmailDispatcher::new(
        RecordingMailer::new(throttle_first),
        EmailTemplates::default(),
        RateLimitConfig::default(),
    )
}

fn group_invite(to_email: &str) -> EmailMessage {
    EmailMessage::GroupInvite {
        to_email: to_email.to_string(),
        group_name: "Thursday Crew".to_string(),
        inviter_name: "Ana".to_string(),
        link: "https://example.com/groups/g1".to_string(),
        reply_to: "ana@example.com".to_string(),
    }
}

fn summary() -> EventSummary {
    EventSummary {
        title: "Friday Game".to_string(),
        date: "Fri, Jan 9, 7:00 PM".to_string(),
        location: "Sam's".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_fourth_send_waits_for_window() {
    let dispatcher = dispatcher(0);

    for to in ["a@x.com", "b@x.com", "c@x.com", "d@x.com"] {
        dispatcher.send(&group_invite(to)).await.unwrap();
    }

    let delivered = dispatcher.mailer().delivered();
    assert_eq!(delivered.len(), 4);
    for (_, at) in &delivered[..3] {
        assert!(*at < Duration::from_millis(2000));
    }
    assert_eq!(delivered[3].0, "d@x.com");
    assert!(delivered[3].1 >= Duration::from_millis(2000));
    assert!(delivered[3].1 < Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn test_throttled_send_retries_then_succeeds() {
    let dispatcher = dispatcher(2);

    dispatcher.send(&group_invite("cy@x.com")).await.unwrap();

    assert_eq!(dispatcher.mailer().calls(), 3);
    let delivered = dispatcher.mailer().delivered();
    assert_eq!(delivered.len(), 1);
    assert!(delivered[0].1 >= Duration::from_millis(4000));
}

#[tokio::test(start_paused = true)]
async fn test_retries_exhausted() {
    let dispatcher = dispatcher(u32::MAX);

    let result = dispatcher.send(&group_invite("cy@x.com")).await;

    assert_eq!(result, Err(MailError::RetriesExhausted { attempts: 4 }));
    assert_eq!(dispatcher.mailer().calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_transport_error_is_not_retried() {
    let dispatcher = dispatcher(0);

    let result = dispatcher.send(&group_invite("bounce@x.com")).await;

    assert!(matches!(result, Err(MailError::Transport(_))));
    assert_eq!(dispatcher.mailer().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_recipient_never_reaches_mailer() {
    let dispatcher = dispatcher(0);

    let result = dispatcher.send(&group_invite("not-an-address")).await;

    assert_eq!(
        result,
        Err(MailError::InvalidRecipient("not-an-address".to_string()))
    );
    assert_eq!(dispatcher.mailer().calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cancellations_continue_past_failures() {
    let dispatcher = dispatcher(0);
    let recipients = vec![
        "a@x.com".to_string(),
        "bounce@x.com".to_string(),
        "nobody".to_string(),
        "c@x.com".to_string(),
    ];

    let report = dispatcher.send_cancellations(&recipients, &summary()).await;

    assert!(!report.all_sent());
    assert_eq!(report.sent, vec!["a@x.com".to_string(), "c@x.com".to_string()]);
    assert_eq!(report.failed.len(), 2);
    assert_eq!(report.failed[0].0, "bounce@x.com");
    assert!(matches!(report.failed[0].1, MailError::Transport(_)));
    assert_eq!(
        report.failed[1].1,
        MailError::InvalidRecipient("nobody".to_string())
    );
}
