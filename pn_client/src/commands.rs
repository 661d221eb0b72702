use std::fmt;

/// Commands typed at the timer prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockCommand {
    /// Start, pause or resume the countdown.
    TogglePause,
    /// Jump to the next blind level.
    Skip,
    /// Restart with another template, by id, alias or name.
    SelectTemplate(String),
    /// Print the blind structure.
    ShowLevels,
    /// Print the command list.
    Help,
    /// Stop the clock and exit.
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Template command missing the template name.
    MissingTemplateName,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTemplateName => write!(
                f,
                "Template command requires a name (e.g., 'template turbo')"
            ),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a line typed at the timer prompt.
///
/// # Examples
///
/// ```
/// use pn_client::commands::{ClockCommand, parse_command};
///
/// assert_eq!(parse_command("p"), Ok(ClockCommand::TogglePause));
/// assert_eq!(parse_command("skip"), Ok(ClockCommand::Skip));
/// assert_eq!(
///     parse_command("t high roller"),
///     Ok(ClockCommand::SelectTemplate("high roller".to_string()))
/// );
/// ```
pub fn parse_command(input: &str) -> Result<ClockCommand, ParseError> {
    let trimmed = input.trim();

    match trimmed.to_lowercase().as_str() {
        "" | "p" | "pause" | "resume" => return Ok(ClockCommand::TogglePause),
        "s" | "skip" | "next" => return Ok(ClockCommand::Skip),
        "l" | "levels" => return Ok(ClockCommand::ShowLevels),
        "h" | "help" | "?" => return Ok(ClockCommand::Help),
        "q" | "quit" | "exit" => return Ok(ClockCommand::Quit),
        _ => {}
    }

    // Template names may contain spaces
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head.to_lowercase().as_str() {
        "t" | "template" if rest.is_empty() => Err(ParseError::MissingTemplateName),
        "t" | "template" => Ok(ClockCommand::SelectTemplate(rest.to_string())),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Single-word command tests ===

    #[test]
    fn test_parse_pause_aliases() {
        for input in ["p", "pause", "resume", "PAUSE"] {
            assert_eq!(parse_command(input), Ok(ClockCommand::TogglePause));
        }
    }

    #[test]
    fn test_parse_empty_line_toggles() {
        assert_eq!(parse_command("   "), Ok(ClockCommand::TogglePause));
    }

    #[test]
    fn test_parse_skip() {
        assert_eq!(parse_command("s"), Ok(ClockCommand::Skip));
        assert_eq!(parse_command("skip"), Ok(ClockCommand::Skip));
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!(parse_command("l"), Ok(ClockCommand::ShowLevels));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command("q"), Ok(ClockCommand::Quit));
        assert_eq!(parse_command("quit"), Ok(ClockCommand::Quit));
    }

    // === Template command tests ===

    #[test]
    fn test_parse_template() {
        assert_eq!(
            parse_command("template turbo"),
            Ok(ClockCommand::SelectTemplate("turbo".to_string()))
        );
    }

    #[test]
    fn test_parse_template_keeps_inner_spaces() {
        assert_eq!(
            parse_command("  t   Friday Deep Stack  "),
            Ok(ClockCommand::SelectTemplate("Friday Deep Stack".to_string()))
        );
    }

    #[test]
    fn test_parse_template_missing_name() {
        assert_eq!(parse_command("t"), Err(ParseError::MissingTemplateName));
        assert_eq!(
            parse_command("template   "),
            Err(ParseError::MissingTemplateName)
        );
    }

    // === Error cases ===

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(
            parse_command("raise 100"),
            Err(ParseError::UnrecognizedCommand("raise 100".to_string()))
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnrecognizedCommand("fold".to_string());
        assert!(err.to_string().contains("'fold'"));
        assert!(err.to_string().contains("help"));
    }
}
