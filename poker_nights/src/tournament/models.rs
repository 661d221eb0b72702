//! Blind structure and chip distribution templates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating a tournament template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template name is required")]
    MissingName,

    #[error("template needs at least one blind level")]
    NoLevels,

    #[error("level {level}: small blind must be at least 1")]
    SmallBlindTooLow { level: usize },

    #[error("level {level}: big blind {big_blind} must exceed small blind {small_blind}")]
    BigBlindTooLow {
        level: usize,
        small_blind: u64,
        big_blind: u64,
    },

    #[error("level {level}: duration must be at least 1 minute")]
    ZeroDuration { level: usize },

    #[error("chip {index}: value must be at least 1")]
    ZeroChipValue { index: usize },

    #[error("chip {index}: quantity must be at least 1")]
    ZeroChipQuantity { index: usize },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

pub type TemplateResult<T> = Result<T, TemplateError>;

/// One level of a blind structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindLevel {
    /// Level identifier within its template
    #[serde(default)]
    pub id: String,
    /// Small blind amount
    pub small_blind: u64,
    /// Big blind amount
    pub big_blind: u64,
    /// Ante (0 when there is none)
    #[serde(default)]
    pub ante: u64,
    /// Duration of this level in minutes
    pub duration: u32,
}

impl BlindLevel {
    /// Create a new blind level without ante
    pub fn new(id: impl Into<String>, small_blind: u64, big_blind: u64, duration: u32) -> Self {
        Self {
            id: id.into(),
            small_blind,
            big_blind,
            ante: 0,
            duration,
        }
    }

    /// Create a blind level with ante
    pub fn with_ante(mut self, ante: u64) -> Self {
        self.ante = ante;
        self
    }

    /// Level length in seconds
    pub fn duration_secs(&self) -> u32 {
        self.duration.saturating_mul(60)
    }
}

/// A chip denomination in the starting stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipEntry {
    /// Face value
    pub value: u64,
    /// Display colour, e.g. `#DC2626`
    pub color: String,
    /// Chips of this denomination per player
    pub quantity: u32,
}

impl ChipEntry {
    pub fn new(value: u64, color: impl Into<String>, quantity: u32) -> Self {
        Self {
            value,
            color: color.into(),
            quantity,
        }
    }
}

/// Ordered blind structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindTemplate {
    pub id: String,
    pub name: String,
    pub levels: Vec<BlindLevel>,
}

impl BlindTemplate {
    /// Level an editor would append after the current last one.
    ///
    /// Blinds double and the duration carries over. The ante doubles, or
    /// starts at half the last small blind when there was none.
    pub fn suggest_next_level(&self) -> Option<BlindLevel> {
        let last = self.levels.last()?;
        let ante = match last.ante {
            0 => last.small_blind / 2,
            ante => ante.saturating_mul(2),
        };

        Some(BlindLevel {
            id: (self.levels.len() + 1).to_string(),
            small_blind: last.small_blind.saturating_mul(2),
            big_blind: last.big_blind.saturating_mul(2),
            ante,
            duration: last.duration,
        })
    }

    /// Total scheduled length of the structure in minutes
    pub fn total_minutes(&self) -> u64 {
        self.levels.iter().map(|level| u64::from(level.duration)).sum()
    }
}

/// Chip distribution handed to each player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipTemplate {
    pub id: String,
    pub name: String,
    pub chips: Vec<ChipEntry>,
}

impl ChipTemplate {
    /// Chip an editor would append after the current largest one
    pub fn suggest_next_chip(&self) -> Option<ChipEntry> {
        let last = self.chips.last()?;
        Some(ChipEntry {
            value: last.value.saturating_mul(5),
            color: "#000000".to_string(),
            quantity: (last.quantity / 2).max(5),
        })
    }

    /// Value of one player's starting stack
    pub fn total_value(&self) -> u64 {
        self.chips.iter().fold(0u64, |total, chip| {
            total.saturating_add(chip.value.saturating_mul(u64::from(chip.quantity)))
        })
    }
}

/// A selectable tournament setup: blind structure plus chip distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentTemplate {
    pub id: String,
    pub name: String,
    pub blind_template: BlindTemplate,
    pub chip_template: ChipTemplate,
}

impl TournamentTemplate {
    /// Build a user-defined template with a fresh `custom-` id
    pub fn custom(name: impl Into<String>, levels: Vec<BlindLevel>, chips: Vec<ChipEntry>) -> Self {
        let name = name.into();
        let suffix = uuid::Uuid::new_v4().simple().to_string();

        Self {
            id: format!("custom-{suffix}"),
            blind_template: BlindTemplate {
                id: format!("blind-{suffix}"),
                name: format!("{name} Blinds"),
                levels,
            },
            chip_template: ChipTemplate {
                id: format!("chip-{suffix}"),
                name: format!("{name} Chips"),
                chips,
            },
            name,
        }
    }

    /// Whether this template was created by a user rather than shipped built in
    pub fn is_custom(&self) -> bool {
        self.id.starts_with("custom-")
    }

    pub fn levels(&self) -> &[BlindLevel] {
        &self.blind_template.levels
    }

    /// Check the template the same way the editor form does.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, levels before chips.
    pub fn validate(&self) -> TemplateResult<()> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::MissingName);
        }

        if self.blind_template.levels.is_empty() {
            return Err(TemplateError::NoLevels);
        }

        for (index, level) in self.blind_template.levels.iter().enumerate() {
            let number = index + 1;
            if level.small_blind == 0 {
                return Err(TemplateError::SmallBlindTooLow { level: number });
            }
            if level.big_blind < 2 || level.big_blind <= level.small_blind {
                return Err(TemplateError::BigBlindTooLow {
                    level: number,
                    small_blind: level.small_blind,
                    big_blind: level.big_blind,
                });
            }
            if level.duration == 0 {
                return Err(TemplateError::ZeroDuration { level: number });
            }
        }

        for (index, chip) in self.chip_template.chips.iter().enumerate() {
            if chip.value == 0 {
                return Err(TemplateError::ZeroChipValue { index: index + 1 });
            }
            if chip.quantity == 0 {
                return Err(TemplateError::ZeroChipQuantity { index: index + 1 });
            }
        }

        Ok(())
    }
}
