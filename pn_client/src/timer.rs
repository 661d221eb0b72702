//! Operator session around a running clock actor.

use crate::{commands::ClockCommand, display};
use anyhow::{Context, Result};
use poker_nights::tournament::{
    ClockHandle, ClockSnapshot, TournamentTemplate, templates::find_template,
};

/// What the prompt should show after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Clock state after a state-changing command
    Clock(ClockSnapshot),
    /// Pre-rendered text
    Text(String),
    /// Session is over
    Quit,
}

pub const COMMANDS_HELP: &str = "\
commands:
  p, pause, resume     start or pause the clock (or just press enter)
  s, skip              jump to the next level
  t, template NAME     restart with another template
  l, levels            show the blind structure
  q, quit              stop the clock and exit";

/// Routes parsed commands to the clock and remembers which template is live
pub struct TimerSession {
    handle: ClockHandle,
    template: TournamentTemplate,
    custom: Vec<TournamentTemplate>,
}

impl TimerSession {
    pub fn new(
        handle: ClockHandle,
        template: TournamentTemplate,
        custom: Vec<TournamentTemplate>,
    ) -> Self {
        Self {
            handle,
            template,
            custom,
        }
    }

    pub fn template(&self) -> &TournamentTemplate {
        &self.template
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Fails if the clock has shut down or the requested template is unknown
    /// or invalid. The running tournament is untouched in the latter cases.
    pub async fn execute(&mut self, command: ClockCommand) -> Result<Reply> {
        match command {
            ClockCommand::TogglePause => {
                let snapshot = self.handle.toggle_pause().await?;
                Ok(Reply::Clock(snapshot))
            }
            ClockCommand::Skip => {
                let snapshot = self.handle.skip().await?;
                Ok(Reply::Clock(snapshot))
            }
            ClockCommand::SelectTemplate(key) => {
                let template = find_template(&key, &self.custom)?;
                let snapshot = self
                    .handle
                    .select_template(template.clone())
                    .await?
                    .with_context(|| format!("Template '{}' is not usable", template.name))?;
                self.template = template;
                Ok(Reply::Clock(snapshot))
            }
            ClockCommand::ShowLevels => {
                let snapshot = self.handle.snapshot().await?;
                let mut text = display::levels_table(self.template.levels(), snapshot.level - 1);
                text.push_str(&display::chip_summary(&self.template.chip_template));
                Ok(Reply::Text(text))
            }
            ClockCommand::Help => Ok(Reply::Text(COMMANDS_HELP.to_string())),
            ClockCommand::Quit => {
                self.handle.close().await?;
                Ok(Reply::Quit)
            }
        }
    }
}
