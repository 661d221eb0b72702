//! Poker event records as stored in the event store.

use super::errors::{EventError, EventResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// Participant identifier (the auth provider's user id)
pub type PlayerId = String;

/// Event lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Upcoming,
    InProgress,
    Completed,
}

/// Paid finishing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Place {
    First,
    Second,
    Third,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
        };
        write!(f, "{label}")
    }
}

/// A paid finish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub user_id: PlayerId,
    /// Prize in whole dollars
    pub prize: u64,
}

impl Placement {
    pub fn new(user_id: impl Into<PlayerId>, prize: u64) -> Self {
        Self {
            user_id: user_id.into(),
            prize,
        }
    }
}

/// Recorded winners of an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winners {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third: Option<Placement>,
}

impl Winners {
    /// Declared placements, best first
    pub fn placements(&self) -> impl Iterator<Item = (Place, &Placement)> {
        [
            (Place::First, self.first.as_ref()),
            (Place::Second, self.second.as_ref()),
            (Place::Third, self.third.as_ref()),
        ]
        .into_iter()
        .filter_map(|(place, placement)| placement.map(|p| (place, p)))
    }

    pub fn is_empty(&self) -> bool {
        self.placements().next().is_none()
    }

    /// Check winners before they are recorded on an event.
    ///
    /// # Errors
    ///
    /// - [`EventError::NoWinners`] if no place is assigned
    /// - [`EventError::PrizeOrder`] if a non-zero prize is not strictly
    ///   greater than the next non-zero prize below it
    pub fn validate(&self) -> EventResult<()> {
        if self.is_empty() {
            return Err(EventError::NoWinners);
        }

        let prize = |placement: &Option<Placement>| placement.as_ref().map_or(0, |p| p.prize);
        let pairs = [
            (Place::First, prize(&self.first), Place::Second, prize(&self.second)),
            (Place::Second, prize(&self.second), Place::Third, prize(&self.third)),
        ];

        for (higher, higher_prize, lower, lower_prize) in pairs {
            if higher_prize != 0 && lower_prize != 0 && higher_prize <= lower_prize {
                return Err(EventError::PrizeOrder { higher, lower });
            }
        }

        Ok(())
    }
}

/// A scheduled poker night
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokerEvent {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub buy_in: u64,
    pub max_players: usize,
    #[serde(default)]
    pub current_players: BTreeSet<PlayerId>,
    #[serde(default)]
    pub invited_players: BTreeSet<PlayerId>,
    pub owner_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winners: Option<Winners>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl PokerEvent {
    pub fn is_full(&self) -> bool {
        self.current_players.len() >= self.max_players
    }

    pub fn open_seats(&self) -> usize {
        self.max_players.saturating_sub(self.current_players.len())
    }

    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }

    /// Record winners on a completed event.
    ///
    /// # Errors
    ///
    /// Fails if the winners do not validate or a winner did not play.
    pub fn set_winners(&mut self, winners: Winners) -> EventResult<()> {
        winners.validate()?;

        if let Some((place, placement)) = winners
            .placements()
            .find(|(_, p)| !self.current_players.contains(&p.user_id))
        {
            return Err(EventError::WinnerNotPlaying {
                place,
                user_id: placement.user_id.clone(),
            });
        }

        self.winners = Some(winners);
        self.status = EventStatus::Completed;
        Ok(())
    }

    /// Everyone who should hear about changes: players and pending invitees
    pub fn recipients(&self) -> BTreeSet<PlayerId> {
        self.current_players
            .union(&self.invited_players)
            .cloned()
            .collect()
    }
}

/// The part of a completed event the leaderboard reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedEvent {
    pub participants: BTreeSet<PlayerId>,
    #[serde(default)]
    pub winners: Winners,
}

impl CompletedEvent {
    pub fn new(participants: impl IntoIterator<Item = impl Into<PlayerId>>) -> Self {
        Self {
            participants: participants.into_iter().map(Into::into).collect(),
            winners: Winners::default(),
        }
    }

    pub fn with_first(mut self, user_id: impl Into<PlayerId>, prize: u64) -> Self {
        self.winners.first = Some(Placement::new(user_id, prize));
        self
    }

    pub fn with_second(mut self, user_id: impl Into<PlayerId>, prize: u64) -> Self {
        self.winners.second = Some(Placement::new(user_id, prize));
        self
    }

    pub fn with_third(mut self, user_id: impl Into<PlayerId>, prize: u64) -> Self {
        self.winners.third = Some(Placement::new(user_id, prize));
        self
    }
}

impl From<&PokerEvent> for CompletedEvent {
    fn from(event: &PokerEvent) -> Self {
        Self {
            participants: event.current_players.clone(),
            winners: event.winners.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winners(first: u64, second: u64, third: u64) -> Winners {
        Winners {
            first: Some(Placement::new("a", first)),
            second: Some(Placement::new("b", second)),
            third: Some(Placement::new("c", third)),
        }
    }

    #[test]
    fn test_validate_requires_a_winner() {
        assert_eq!(Winners::default().validate(), Err(EventError::NoWinners));
    }

    #[test]
    fn test_validate_prize_order() {
        assert_eq!(winners(100, 50, 20).validate(), Ok(()));
        assert_eq!(
            winners(50, 50, 20).validate(),
            Err(EventError::PrizeOrder {
                higher: Place::First,
                lower: Place::Second
            })
        );
        assert_eq!(
            winners(100, 20, 30).validate(),
            Err(EventError::PrizeOrder {
                higher: Place::Second,
                lower: Place::Third
            })
        );
    }

    #[test]
    fn test_validate_ignores_zero_prizes() {
        assert_eq!(winners(0, 50, 20).validate(), Ok(()));
        assert_eq!(winners(100, 0, 200).validate(), Ok(()));
    }

    #[test]
    fn test_placements_order() {
        let w = Winners {
            first: None,
            second: Some(Placement::new("b", 20)),
            third: Some(Placement::new("c", 10)),
        };
        let places: Vec<Place> = w.placements().map(|(place, _)| place).collect();
        assert_eq!(places, vec![Place::Second, Place::Third]);
    }

    #[test]
    fn test_status_json() {
        assert_eq!(
            serde_json::to_string(&EventStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let status: EventStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, EventStatus::Completed);
    }
}
