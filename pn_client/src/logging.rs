//! Logging setup for the client binary.
//!
//! The library logs through the `log` facade; the `tracing-log` bridge in
//! `tracing-subscriber` routes those records into the same output.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Level comes from `RUST_LOG`, default `info`.
///
/// Logs go to stderr so they do not interleave with the timer display.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Logging initialized");
}
