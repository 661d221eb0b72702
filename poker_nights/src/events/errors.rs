//! Event error types.

use super::models::{Place, PlayerId};
use thiserror::Error;

/// Event errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// No place was assigned
    #[error("Please select at least one winner")]
    NoWinners,

    /// Prizes are not strictly decreasing
    #[error("{higher} place prize must be greater than {lower} place")]
    PrizeOrder { higher: Place, lower: Place },

    /// Winner is not in the event's player list
    #[error("{place} place winner {user_id} did not play in this event")]
    WinnerNotPlaying { place: Place, user_id: PlayerId },
}

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;
