//! Poker event records, winner bookkeeping and calendar export.
//!
//! Events themselves live in an external document store. This module holds
//! their shape, the checks applied before winners are recorded, and the
//! filter that turns a group's event list into the snapshot the
//! leaderboard aggregates.

pub mod calendar;
pub mod errors;
pub mod models;

pub use errors::{EventError, EventResult};
pub use models::{
    CompletedEvent, EventStatus, Place, Placement, PlayerId, PokerEvent, Winners,
};

/// Completed events belonging to one group, ready for aggregation
pub fn completed_for_group(events: &[PokerEvent], group_id: &str) -> Vec<CompletedEvent> {
    events
        .iter()
        .filter(|event| event.is_completed() && event.group_id.as_deref() == Some(group_id))
        .map(CompletedEvent::from)
        .collect()
}

/// Parse a JSON array of events as exported from the event store
///
/// # Errors
///
/// Returns the JSON error if the document is malformed.
pub fn parse_events(json: &str) -> serde_json::Result<Vec<PokerEvent>> {
    serde_json::from_str(json)
}
