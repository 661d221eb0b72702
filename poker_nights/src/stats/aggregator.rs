//! Per-group win and earnings tallies.

use super::{
    directory::MemberDirectory,
    models::{LeaderboardOrder, PlayerStat, UserStats},
};
use crate::events::{CompletedEvent, Place, PlayerId, PokerEvent};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Tally every participant of `events`, recomputed from scratch.
///
/// Each participant counts one game per event no matter how many places they
/// hold. First place adds a win; every paid place adds its prize. Placements
/// naming someone outside that event's participants are skipped and logged,
/// leaving every other tally untouched.
///
/// Results are ordered by participant id; use [`leaderboard`] for rankings.
pub fn aggregate<D>(events: &[CompletedEvent], directory: &D) -> Vec<PlayerStat>
where
    D: MemberDirectory + ?Sized,
{
    let mut tallies: BTreeMap<&PlayerId, PlayerStat> = BTreeMap::new();

    for event in events {
        for participant in &event.participants {
            tallies
                .entry(participant)
                .or_insert_with(|| PlayerStat::new(participant.clone(), String::new()))
                .games_played += 1;
        }

        for (place, placement) in event.winners.placements() {
            if !event.participants.contains(&placement.user_id) {
                log::warn!(
                    "Ignoring {} place for {}: not a participant of the event",
                    place,
                    placement.user_id
                );
                continue;
            }

            if let Some(stat) = tallies.get_mut(&placement.user_id) {
                if place == Place::First {
                    stat.games_won += 1;
                }
                stat.total_earnings = match stat.total_earnings.checked_add(placement.prize) {
                    Some(total) => total,
                    None => {
                        log::warn!(
                            "Earnings for {} overflowed; capping at {}",
                            placement.user_id,
                            u64::MAX
                        );
                        u64::MAX
                    }
                };
            }
        }
    }

    tallies
        .into_values()
        .map(|mut stat| {
            stat.display_name = directory.label(&stat.user_id);
            stat
        })
        .collect()
}

/// Most wins first; ties keep their existing order
pub fn sort_by_wins(stats: &mut [PlayerStat]) {
    stats.sort_by(|a, b| b.games_won.cmp(&a.games_won));
}

/// Most games played first; ties keep their existing order
pub fn sort_by_games(stats: &mut [PlayerStat]) {
    stats.sort_by(|a, b| b.games_played.cmp(&a.games_played));
}

/// Most prize money first; ties keep their existing order
pub fn sort_by_earnings(stats: &mut [PlayerStat]) {
    stats.sort_by(|a, b| b.total_earnings.cmp(&a.total_earnings));
}

/// Aggregate and rank in one step
pub fn leaderboard<D>(
    events: &[CompletedEvent],
    directory: &D,
    order: LeaderboardOrder,
) -> Vec<PlayerStat>
where
    D: MemberDirectory + ?Sized,
{
    let mut stats = aggregate(events, directory);
    match order {
        LeaderboardOrder::Wins => sort_by_wins(&mut stats),
        LeaderboardOrder::Games => sort_by_games(&mut stats),
        LeaderboardOrder::Earnings => sort_by_earnings(&mut stats),
    }
    stats
}

/// Dashboard numbers for one user across every event they joined.
///
/// Upcoming games are events on or after `now` that list the user, whatever
/// their status.
pub fn user_summary(events: &[PokerEvent], user_id: &str, now: DateTime<Utc>) -> UserStats {
    let mut stats = UserStats::default();

    for event in events.iter().filter(|e| e.current_players.contains(user_id)) {
        if event.is_completed() {
            stats.games_played += 1;

            let won = event
                .winners
                .as_ref()
                .and_then(|w| w.first.as_ref())
                .is_some_and(|first| first.user_id == user_id);
            if won {
                stats.games_won += 1;
            }
        }

        if event.date >= now {
            stats.upcoming_games += 1;
        }
    }

    stats
}
