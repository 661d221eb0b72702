//! Group leaderboards.
//!
//! Statistics are a pure function of an already-fetched snapshot of a
//! group's completed events. Callers decide when to re-fetch and call
//! [`aggregate`] again; nothing is cached between calls.
//!
//! ## Example
//!
//! ```
//! use poker_nights::events::CompletedEvent;
//! use poker_nights::stats::{LeaderboardOrder, NoDirectory, leaderboard};
//!
//! let events = vec![
//!     CompletedEvent::new(["ana", "ben"]).with_first("ana", 100),
//!     CompletedEvent::new(["ana", "cy"]).with_first("cy", 50).with_second("ana", 20),
//! ];
//!
//! let board = leaderboard(&events, &NoDirectory, LeaderboardOrder::Games);
//! assert_eq!(board[0].user_id, "ana");
//! assert_eq!(board[0].total_earnings, 120);
//! ```

pub mod aggregator;
pub mod directory;
pub mod models;

pub use aggregator::{
    aggregate, leaderboard, sort_by_earnings, sort_by_games, sort_by_wins, user_summary,
};
pub use directory::{MemberDirectory, MemberProfile, NoDirectory};
pub use models::{LeaderboardOrder, PlayerStat, UserStats};
