//! Tournament blind timer.
//!
//! This module provides:
//! - Blind structure and chip distribution templates
//! - Built-in Standard, Turbo and High Roller templates
//! - The countdown state machine that walks through blind levels
//! - A clock actor that owns the one-second cadence
//!
//! ## Example
//!
//! ```no_run
//! use poker_nights::tournament::{ClockActor, TICK_INTERVAL, templates};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (clock, task) = ClockActor::spawn(&templates::turbo_tournament(), TICK_INTERVAL)?;
//!
//!     // Clocks start paused
//!     let snapshot = clock.toggle_pause().await?;
//!     println!("Level {} running", snapshot.level);
//!
//!     clock.close().await?;
//!     task.await?;
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod clock;
pub mod messages;
pub mod models;
pub mod templates;

pub use actor::{ClockActor, ClockError, ClockHandle, ClockResult, TICK_INTERVAL};
pub use clock::{ClockPhase, ClockSnapshot, Tournament, format_time};
pub use messages::ClockMessage;
pub use models::{
    BlindLevel, BlindTemplate, ChipEntry, ChipTemplate, TemplateError, TemplateResult,
    TournamentTemplate,
};
