//! Clock actor message types.

use super::{
    clock::ClockSnapshot,
    models::{TemplateResult, TournamentTemplate},
};
use tokio::sync::{mpsc, oneshot};

/// Messages that can be sent to a ClockActor
#[derive(Debug)]
pub enum ClockMessage {
    /// Pause or resume the countdown
    TogglePause {
        response: oneshot::Sender<ClockSnapshot>,
    },

    /// End the current level immediately
    Skip {
        response: oneshot::Sender<ClockSnapshot>,
    },

    /// Replace the running tournament with a fresh one from a template
    SelectTemplate {
        template: Box<TournamentTemplate>,
        response: oneshot::Sender<TemplateResult<ClockSnapshot>>,
    },

    /// Get the current clock state
    GetState {
        response: oneshot::Sender<ClockSnapshot>,
    },

    /// Receive a snapshot after every change
    Subscribe { sender: mpsc::Sender<ClockSnapshot> },

    /// Count down one second out of band
    Tick,

    /// Stop the actor
    Close { response: oneshot::Sender<()> },
}
