//! Plain-text rendering for the terminal.

use poker_nights::{
    stats::PlayerStat,
    tournament::{BlindLevel, ChipTemplate, ClockPhase, ClockSnapshot, format_time},
};
use std::fmt::Write;

fn blinds(small_blind: u64, big_blind: u64, ante: u64) -> String {
    if ante > 0 {
        format!("{small_blind}/{big_blind} ante {ante}")
    } else {
        format!("{small_blind}/{big_blind}")
    }
}

/// Header printed whenever the level changes
pub fn level_banner(snapshot: &ClockSnapshot) -> String {
    let mut banner = format!(
        "== {} | Level {}/{} | Blinds {} ==",
        snapshot.name,
        snapshot.level,
        snapshot.level_count,
        blinds(snapshot.small_blind, snapshot.big_blind, snapshot.ante)
    );

    if let Some(next) = &snapshot.next_level {
        let _ = write!(
            banner,
            "\n   next: {}",
            blinds(next.small_blind, next.big_blind, next.ante)
        );
    }
    banner
}

/// One-line countdown
pub fn status_line(snapshot: &ClockSnapshot) -> String {
    let state = match snapshot.phase {
        ClockPhase::ReadyPaused => "ready (p to start)",
        ClockPhase::Running => "running",
        ClockPhase::PausedMidLevel => "paused",
        ClockPhase::Finished => "finished",
    };
    format!("{} [{}]", format_time(snapshot.time_remaining), state)
}

/// Blind structure with the current level marked
pub fn levels_table(levels: &[BlindLevel], current: usize) -> String {
    let mut table = format!("{:>3}  {:>13}  {:>6}  {:>5}\n", "#", "blinds", "ante", "min");

    for (i, level) in levels.iter().enumerate() {
        let marker = if i == current { '>' } else { ' ' };
        let _ = writeln!(
            table,
            "{marker}{:>2}  {:>13}  {:>6}  {:>5}",
            i + 1,
            format!("{}/{}", level.small_blind, level.big_blind),
            level.ante,
            level.duration
        );
    }
    table
}

/// Starting stack breakdown
pub fn chip_summary(chips: &ChipTemplate) -> String {
    let mut summary = String::new();
    for chip in &chips.chips {
        let _ = writeln!(summary, "  {:>6} {:<8} x{}", chip.value, chip.color, chip.quantity);
    }
    let _ = write!(summary, "  stack value {}", chips.total_value());
    summary
}

/// Ranked leaderboard with win percentage
pub fn leaderboard_table(stats: &[PlayerStat]) -> String {
    if stats.is_empty() {
        return "No completed games yet".to_string();
    }

    let mut table = format!(
        "{:>3}  {:<24} {:>6} {:>5} {:>7} {:>9}\n",
        "#", "player", "games", "wins", "win %", "earnings"
    );

    for (rank, stat) in stats.iter().enumerate() {
        let win_pct = stat
            .win_percentage()
            .map(|pct| format!("{pct:.1}"))
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            table,
            "{:>3}  {:<24} {:>6} {:>5} {:>7} {:>9}",
            rank + 1,
            stat.display_name,
            stat.games_played,
            stat.games_won,
            win_pct,
            format!("${}", stat.total_earnings)
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use poker_nights::tournament::{Tournament, templates};

    #[test]
    fn test_banner_shows_next_level() {
        let clock = Tournament::start(&templates::standard_tournament()).unwrap();
        let banner = level_banner(&clock.snapshot());

        assert!(banner.contains("Level 1/8"));
        assert!(banner.contains("Blinds 25/50 =="));
        assert!(banner.contains("next: 50/100"));
    }

    #[test]
    fn test_banner_shows_ante() {
        let mut clock = Tournament::start(&templates::standard_tournament()).unwrap();
        clock.skip();
        clock.skip();
        assert!(level_banner(&clock.snapshot()).contains("100/200 ante 25"));
    }

    #[test]
    fn test_status_line() {
        let mut clock = Tournament::start(&templates::turbo_tournament()).unwrap();
        assert_eq!(status_line(&clock.snapshot()), "10:00 [ready (p to start)]");

        clock.toggle_pause();
        clock.tick();
        assert_eq!(status_line(&clock.snapshot()), "09:59 [running]");
    }

    #[test]
    fn test_levels_table_marks_current() {
        let template = templates::turbo_tournament();
        let table = levels_table(template.levels(), 1);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[2].starts_with('>'));
        assert!(lines[2].contains("50/100"));
        assert!(lines[1].starts_with(' '));
    }

    #[test]
    fn test_chip_summary_total() {
        let summary = chip_summary(&templates::standard_chips());
        assert!(summary.ends_with("stack value 12500"));
    }

    #[test]
    fn test_leaderboard_table() {
        let mut ana = PlayerStat::new("a", "Ana");
        ana.games_played = 4;
        ana.games_won = 1;
        ana.total_earnings = 120;

        let table = leaderboard_table(&[ana]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("Ana"));
        assert!(row.contains("25.0"));
        assert!(row.contains("$120"));
    }

    #[test]
    fn test_empty_leaderboard() {
        assert_eq!(leaderboard_table(&[]), "No completed games yet");
    }
}
