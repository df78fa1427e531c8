//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The original interface is
//! the single `-u` flag; the subcommands cover the same flow plus a
//! check-only mode and shell completions.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::UpdaterConfig;
use crate::install::{self, InstallStrategy};

/// zenup - Keeps the Zen browser AppImage up to date.
#[derive(Debug, Parser)]
#[command(name = "zenup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Check for a new release and install it
    #[arg(short = 'u', long)]
    pub update: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory the AppImage is staged in before install
    #[arg(long, global = true, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Path the binary is installed to
    #[arg(long, global = true, value_name = "PATH")]
    pub install_to: Option<PathBuf>,

    /// How the staged file is moved into the install path [default: auto]
    #[arg(long, global = true, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<StrategyArg>,

    /// Releases-listing endpoint (overrides the Zen default)
    #[arg(long, global = true, hide = true, value_name = "URL")]
    pub releases_url: Option<String>,

    /// Base URL release assets are downloaded from
    #[arg(long, global = true, hide = true, value_name = "URL")]
    pub download_base: Option<String>,

    /// Shell command that reports the installed version
    #[arg(long, global = true, hide = true, value_name = "CMD")]
    pub version_command: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Build the run configuration: the Zen defaults with any CLI
    /// overrides applied.
    pub fn updater_config(&self) -> UpdaterConfig {
        let mut config = UpdaterConfig::default_for_zen();

        if let Some(dir) = &self.download_dir {
            config.download_dir = dir.clone();
        }
        if let Some(path) = &self.install_to {
            config.install_path = path.clone();
        }
        if let Some(url) = &self.releases_url {
            config.releases_url = url.clone();
        }
        if let Some(base) = &self.download_base {
            config.download_base_url = base.clone();
        }
        if let Some(cmd) = &self.version_command {
            config.version_command = cmd.clone();
        }

        config
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check for a new release and install it (same as -u)
    Update,

    /// Report the installed and latest versions without installing
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Install strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Direct rename when the install directory is writable, sudo otherwise
    Auto,
    /// Rename as the current user, never elevate
    Direct,
    /// Always go through sudo
    Sudo,
}

impl StrategyArg {
    /// Build the strategy this argument names.
    pub fn build(&self, install_dir: &std::path::Path) -> Box<dyn InstallStrategy> {
        match self {
            Self::Auto => install::choose_strategy(install_dir),
            Self::Direct => Box::new(install::DirectRename),
            Self::Sudo => Box::new(install::ElevatedMove::new()),
        }
    }
}
