//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI invocations

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands, StrategyArg};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution
/// logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI invocations to their implementations.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// The bare invocation with no flag and no subcommand prints usage
    /// and succeeds; `-u` and the `update` subcommand run the update
    /// flow.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = cli.updater_config();
        let strategy = cli.strategy.unwrap_or(StrategyArg::Auto);

        match &cli.command {
            Some(Commands::Update) => {
                let cmd = super::update::UpdateCommand::new(config, strategy);
                cmd.execute(ui)
            }
            Some(Commands::Check) => {
                let cmd = super::check::CheckCommand::new(config);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None if cli.update => {
                let cmd = super::update::UpdateCommand::new(config, strategy);
                cmd.execute(ui)
            }
            None => {
                // No recognized request: print usage and exit cleanly.
                Cli::command()
                    .print_help()
                    .map_err(anyhow::Error::from)?;
                Ok(CommandResult::success())
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
