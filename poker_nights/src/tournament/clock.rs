//! Blind level countdown state machine.
//!
//! The clock never looks at wall time. Whoever owns it calls [`Tournament::tick`]
//! once per elapsed second; see [`super::actor`] for the scheduled driver.

use super::models::{BlindLevel, ChipTemplate, TemplateError, TemplateResult, TournamentTemplate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the clock is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockPhase {
    /// Paused with the current level untouched
    ReadyPaused,
    /// Counting down
    Running,
    /// Paused part way through a level
    PausedMidLevel,
    /// Last level expired
    Finished,
}

impl fmt::Display for ClockPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ReadyPaused => "ready",
            Self::Running => "running",
            Self::PausedMidLevel => "paused",
            Self::Finished => "finished",
        };
        write!(f, "{label}")
    }
}

/// Runtime state of one tournament's blind clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    id: String,
    name: String,
    levels: Vec<BlindLevel>,
    chips: Option<ChipTemplate>,
    current_level: usize,
    time_remaining: u32,
    is_running: bool,
    is_paused: bool,
}

impl Tournament {
    /// Start a tournament on the first level, paused and ready to go.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NoLevels`] if the template has no blind levels.
    pub fn start(template: &TournamentTemplate) -> TemplateResult<Self> {
        let mut tournament = Self::from_levels(template.levels().to_vec())?;
        tournament.id = template.id.clone();
        tournament.name = template.name.clone();
        tournament.chips = Some(template.chip_template.clone());
        Ok(tournament)
    }

    /// Start a bare blind structure with no chip distribution
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NoLevels`] if `levels` is empty.
    pub fn from_levels(levels: Vec<BlindLevel>) -> TemplateResult<Self> {
        let first = levels.first().ok_or(TemplateError::NoLevels)?;
        let time_remaining = first.duration_secs();

        Ok(Self {
            id: String::new(),
            name: String::new(),
            levels,
            chips: None,
            current_level: 0,
            time_remaining,
            is_running: true,
            is_paused: true,
        })
    }

    /// Count down one second.
    ///
    /// Does nothing unless the clock is running and not paused. When the
    /// countdown reaches zero the level advances instead of going negative.
    pub fn tick(&mut self) {
        if !self.is_running || self.is_paused {
            return;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.advance_level();
        }
    }

    /// Move to the next level, or finish on the last one.
    ///
    /// Finishing leaves the remaining time alone: a natural expiry has
    /// already counted down to zero, and a manual skip keeps what was left.
    pub fn advance_level(&mut self) {
        if self.current_level + 1 < self.levels.len() {
            self.current_level += 1;
            self.time_remaining = self.levels[self.current_level].duration_secs();
            let level = &self.levels[self.current_level];
            log::info!(
                "Tournament '{}' level {}: blinds {}/{} ante {}",
                self.name,
                self.current_level + 1,
                level.small_blind,
                level.big_blind,
                level.ante
            );
        } else {
            if self.is_running {
                log::info!("Tournament '{}' finished", self.name);
            }
            self.is_running = false;
        }
    }

    /// Pause a running clock or resume a paused one
    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }

    /// Operator override: end the current level now
    pub fn skip(&mut self) {
        self.advance_level();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn levels(&self) -> &[BlindLevel] {
        &self.levels
    }

    pub fn chips(&self) -> Option<&ChipTemplate> {
        self.chips.as_ref()
    }

    /// Zero-based index of the level in play
    pub fn current_level_index(&self) -> usize {
        self.current_level
    }

    pub fn current_level(&self) -> &BlindLevel {
        &self.levels[self.current_level]
    }

    pub fn next_level(&self) -> Option<&BlindLevel> {
        self.levels.get(self.current_level + 1)
    }

    /// Seconds left in the current level
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn phase(&self) -> ClockPhase {
        if !self.is_running {
            ClockPhase::Finished
        } else if !self.is_paused {
            ClockPhase::Running
        } else if self.time_remaining == self.current_level().duration_secs() {
            ClockPhase::ReadyPaused
        } else {
            ClockPhase::PausedMidLevel
        }
    }

    /// Everything a display needs, detached from the clock
    pub fn snapshot(&self) -> ClockSnapshot {
        let level = self.current_level();
        ClockSnapshot {
            name: self.name.clone(),
            level: self.current_level + 1,
            level_count: self.levels.len(),
            small_blind: level.small_blind,
            big_blind: level.big_blind,
            ante: level.ante,
            time_remaining: self.time_remaining,
            is_running: self.is_running,
            is_paused: self.is_paused,
            phase: self.phase(),
            next_level: self.next_level().cloned(),
        }
    }
}

/// Point-in-time view of a [`Tournament`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockSnapshot {
    pub name: String,
    /// One-based level number
    pub level: usize,
    pub level_count: usize,
    pub small_blind: u64,
    pub big_blind: u64,
    pub ante: u64,
    /// Seconds left in the level
    pub time_remaining: u32,
    pub is_running: bool,
    pub is_paused: bool,
    pub phase: ClockPhase,
    pub next_level: Option<BlindLevel>,
}

/// Format seconds as `MM:SS`, or `H:MM:SS` from one hour up
pub fn format_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
