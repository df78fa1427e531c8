//! zenup - Keeps the Zen browser AppImage up to date.
//!
//! zenup probes the installed browser for its version, reads the GitHub
//! release feed, and when the latest tag differs from the installed
//! version downloads the new AppImage, marks it executable, and moves it
//! into place.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration (URLs, paths, probe command)
//! - [`download`] - Release asset download
//! - [`error`] - Error types and result aliases
//! - [`install`] - Executable-bit handling and install strategies
//! - [`probe`] - Installed-version probe
//! - [`releases`] - Release feed access and latest-release selection
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output and its test mock
//! - [`updater`] - The update flow itself
//!
//! # Example
//!
//! ```no_run
//! use zenup::config::UpdaterConfig;
//! use zenup::ui::{create_ui, OutputMode};
//! use zenup::updater::Updater;
//!
//! let mut ui = create_ui(OutputMode::Normal);
//! let updater = Updater::new(UpdaterConfig::default_for_zen());
//! updater.run(ui.as_mut()).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod install;
pub mod probe;
pub mod releases;
pub mod shell;
pub mod ui;
pub mod updater;

pub use error::{Result, UpdateError};
