//! Leaderboard statistics.

use crate::events::PlayerId;
use serde::{Deserialize, Serialize};

/// One player's record within a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub user_id: PlayerId,
    pub display_name: String,
    /// Completed events the player took part in
    pub games_played: u32,
    /// First-place finishes
    pub games_won: u32,
    /// Prize money from every paid place
    pub total_earnings: u64,
}

impl PlayerStat {
    pub fn new(user_id: impl Into<PlayerId>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            games_played: 0,
            games_won: 0,
            total_earnings: 0,
        }
    }

    /// Share of games won in percent, `None` before the first game
    pub fn win_percentage(&self) -> Option<f64> {
        if self.games_played == 0 {
            None
        } else {
            Some(f64::from(self.games_won) / f64::from(self.games_played) * 100.0)
        }
    }
}

/// Leaderboard orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardOrder {
    /// Most first-place finishes
    #[default]
    Wins,
    /// Most games played
    Games,
    /// Most prize money
    Earnings,
}

impl std::str::FromStr for LeaderboardOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wins" | "won" => Ok(Self::Wins),
            "games" | "played" => Ok(Self::Games),
            "earnings" | "money" => Ok(Self::Earnings),
            other => Err(format!("unknown leaderboard order '{other}'")),
        }
    }
}

/// Personal dashboard numbers for one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub games_played: u32,
    pub games_won: u32,
    pub upcoming_games: u32,
}
