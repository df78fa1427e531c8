//! Check command implementation.
//!
//! Reports the installed and latest versions without touching anything.

use crate::config::UpdaterConfig;
use crate::ui::UserInterface;
use crate::updater::Updater;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config: UpdaterConfig,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: UpdaterConfig) -> Self {
        Self { config }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let updater = Updater::new(self.config.clone());
        let status = updater.check()?;

        ui.message(&format!("Installed: {}", status.installed));
        ui.message(&format!("Latest:    {}", status.latest));

        if status.update_available {
            ui.warning(&format!(
                "Update available: {} -> {} (run `zenup -u` to install)",
                status.installed, status.latest
            ));
        } else {
            ui.success(&format!("{} is up to date", self.config.app_name));
        }

        Ok(CommandResult::success())
    }
}
