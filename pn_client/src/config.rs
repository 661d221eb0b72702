//! Client configuration management.
//!
//! Consolidates command-line overrides and environment variable reads into a
//! validated configuration.

use poker_nights::stats::LeaderboardOrder;
use std::{path::PathBuf, time::Duration};

/// Template used when neither `--template` nor `PN_TEMPLATE` is set
pub const DEFAULT_TEMPLATE: &str = "standard";

/// Complete client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Template id, alias or name to start the timer with
    pub template: String,
    /// Optional JSON file of custom templates
    pub templates_file: Option<PathBuf>,
    /// Countdown cadence
    pub tick: Duration,
    /// Event store JSON export
    pub events_file: Option<PathBuf>,
    /// Member profiles keyed by user id
    pub members_file: Option<PathBuf>,
    /// Restrict the leaderboard to one group
    pub group: Option<String>,
    /// Leaderboard ranking
    pub order: LeaderboardOrder,
}

/// Values given on the command line, which win over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub template: Option<String>,
    pub templates_file: Option<PathBuf>,
    pub events_file: Option<PathBuf>,
    pub members_file: Option<PathBuf>,
    pub group: Option<String>,
    pub order: Option<String>,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the leaderboard order is not recognised
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let template = overrides
            .template
            .or_else(|| std::env::var("PN_TEMPLATE").ok())
            .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());

        let templates_file = overrides
            .templates_file
            .or_else(|| std::env::var("PN_TEMPLATES_FILE").ok().map(PathBuf::from));

        let events_file = overrides
            .events_file
            .or_else(|| std::env::var("PN_EVENTS_FILE").ok().map(PathBuf::from));

        let members_file = overrides
            .members_file
            .or_else(|| std::env::var("PN_MEMBERS_FILE").ok().map(PathBuf::from));

        let order = match overrides.order {
            Some(order) => order.parse().map_err(|reason| ConfigError::Invalid {
                var: "--order".to_string(),
                reason,
            })?,
            None => LeaderboardOrder::default(),
        };

        Ok(ClientConfig {
            template,
            templates_file,
            tick: Duration::from_millis(parse_env_or("PN_TICK_MILLIS", 1000)),
            events_file,
            members_file,
            group: overrides.group,
            order,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.template.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "PN_TEMPLATE".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.tick.is_zero() {
            return Err(ConfigError::Invalid {
                var: "PN_TICK_MILLIS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.tick > Duration::from_secs(60) {
            return Err(ConfigError::Invalid {
                var: "PN_TICK_MILLIS".to_string(),
                reason: "Must be at most 60000 (one minute)".to_string(),
            });
        }

        Ok(())
    }

    /// The events file, required by the leaderboard command
    pub fn require_events_file(&self) -> Result<&PathBuf, ConfigError> {
        self.events_file
            .as_ref()
            .ok_or_else(|| ConfigError::MissingRequired {
                var: "PN_EVENTS_FILE".to_string(),
                hint: "Pass --events FILE with a JSON export of the events collection"
                    .to_string(),
            })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig {
            template: "turbo".to_string(),
            templates_file: None,
            tick: Duration::from_secs(1),
            events_file: None,
            members_file: None,
            group: None,
            order: LeaderboardOrder::Wins,
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingRequired {
            var: "PN_EVENTS_FILE".to_string(),
            hint: "Pass --events".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PN_EVENTS_FILE"));
        assert!(msg.contains("Pass --events"));
    }

    #[test]
    fn test_overrides_win() {
        let config = ClientConfig::from_env(Overrides {
            template: Some("high-roller".to_string()),
            events_file: Some(PathBuf::from("events.json")),
            group: Some("g1".to_string()),
            order: Some("earnings".to_string()),
            ..Overrides::default()
        })
        .unwrap();

        assert_eq!(config.template, "high-roller");
        assert_eq!(config.require_events_file().unwrap(), &PathBuf::from("events.json"));
        assert_eq!(config.group.as_deref(), Some("g1"));
        assert_eq!(config.order, LeaderboardOrder::Earnings);
    }

    #[test]
    fn test_unknown_order_rejected() {
        let err = ClientConfig::from_env(Overrides {
            order: Some("chips".to_string()),
            ..Overrides::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_config_validation_zero_tick() {
        let config = ClientConfig {
            tick: Duration::ZERO,
            ..config()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_config_validation_blank_template() {
        let blank = ClientConfig {
            template: "  ".to_string(),
            ..config()
        };
        assert!(blank.validate().is_err());
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_missing_events_file() {
        let err = config().require_events_file().unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired { .. }));
    }
}
