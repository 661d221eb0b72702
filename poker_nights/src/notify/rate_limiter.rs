//! Sliding-window send limiter for the email provider.

use std::collections::VecDeque;
use tokio::time::{Duration, Instant};

/// Send rate and retry policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum sends allowed in one window
    pub max_requests: usize,

    /// Window length
    pub interval: Duration,

    /// Wait before retrying a refused or throttled send
    pub retry_delay: Duration,

    /// Retries after the first attempt
    pub max_retries: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 3,
            interval: Duration::from_millis(1000),
            retry_delay: Duration::from_millis(2000),
            max_retries: 3,
        }
    }
}

impl RateLimitConfig {
    /// Defaults overridden by `EMAIL_RATE_MAX_REQUESTS`, `EMAIL_RATE_INTERVAL_MS`,
    /// `EMAIL_RETRY_DELAY_MS` and `EMAIL_MAX_RETRIES`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_requests: std::env::var("EMAIL_RATE_MAX_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_requests),
            interval: std::env::var("EMAIL_RATE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.interval),
            retry_delay: std::env::var("EMAIL_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_delay),
            max_retries: std::env::var("EMAIL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
        }
    }
}

/// Timestamps of recent sends within the current window
#[derive(Debug)]
pub struct SendWindow {
    max_requests: usize,
    interval: Duration,
    sent: VecDeque<Instant>,
}

impl SendWindow {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            interval: config.interval,
            sent: VecDeque::with_capacity(config.max_requests),
        }
    }

    /// Record a send at `now` if the window has room
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        while let Some(&oldest) = self.sent.front() {
            if now.duration_since(oldest) >= self.interval {
                self.sent.pop_front();
            } else {
                break;
            }
        }

        if self.sent.len() < self.max_requests {
            self.sent.push_back(now);
            true
        } else {
            false
        }
    }

    /// Sends counted in the window as of the last acquire
    pub fn in_flight(&self) -> usize {
        self.sent.len()
    }
}
