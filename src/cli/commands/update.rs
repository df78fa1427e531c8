//! Update command implementation.
//!
//! Runs the full probe → lookup → download → install flow.

use crate::cli::args::StrategyArg;
use crate::config::UpdaterConfig;
use crate::ui::UserInterface;
use crate::updater::Updater;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    config: UpdaterConfig,
    strategy: StrategyArg,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(config: UpdaterConfig, strategy: StrategyArg) -> Self {
        Self { config, strategy }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let strategy = self.strategy.build(self.config.install_dir());
        tracing::debug!(strategy = strategy.name(), "install strategy selected");

        let mut updater = Updater::new(self.config.clone()).with_strategy(strategy);
        if !ui.output_mode().shows_progress() {
            updater = updater.without_progress();
        }

        updater.run(ui)?;
        Ok(CommandResult::success())
    }
}
