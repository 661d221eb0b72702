//! # Poker Nights
//!
//! Core logic for organising recurring home poker games.
//!
//! ## Core Modules
//!
//! - [`tournament`]: Blind templates, the level countdown and its clock actor
//! - [`stats`]: Group leaderboards built from completed events
//! - [`events`]: Event records, winner checks and calendar export
//! - [`notify`]: Rate-limited invitation and cancellation emails
//!
//! Persistence, authentication and email delivery belong to external
//! services; this crate works on snapshots handed to it.
//!
//! ## Example
//!
//! ```
//! use poker_nights::tournament::{Tournament, templates};
//!
//! let mut clock = Tournament::start(&templates::standard_tournament()).unwrap();
//! clock.toggle_pause();
//! clock.tick();
//! assert_eq!(clock.time_remaining(), 20 * 60 - 1);
//! ```

/// Tournament blind clock and templates.
pub mod tournament;
pub use tournament::{BlindLevel, ClockSnapshot, Tournament, TournamentTemplate};

/// Group statistics and leaderboards.
pub mod stats;
pub use stats::{PlayerStat, aggregate};

/// Poker event records.
pub mod events;
pub use events::{CompletedEvent, PokerEvent};

/// Email notifications.
pub mod notify;
