//! Command-line interface.
//!
//! This module contains argument definitions ([`args`]) and the command
//! implementations ([`commands`]).

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, StrategyArg};
pub use commands::{Command, CommandDispatcher, CommandResult};
