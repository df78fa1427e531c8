//! Staged-file installation.
//!
//! This module provides:
//! - Executable-bit handling for the downloaded asset
//! - The [`InstallStrategy`] trait and its two implementations
//! - Writability-based default strategy selection
//!
//! The strategy that relocates the staged file into the install path is
//! chosen by the caller and injected into the updater, so the elevation
//! mechanism is never baked into the update flow itself.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, UpdateError};

/// Set the permission bits that make a file executable for everyone.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

/// On Windows, executability is determined by file extension, not
/// permission bits.
#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Relocates a staged file into its final install path.
pub trait InstallStrategy {
    /// Human-readable name for logs and messages.
    fn name(&self) -> &str;

    /// Move `staged` to `dest`, overwriting any existing file there.
    fn install(&self, staged: &Path, dest: &Path) -> Result<()>;
}

/// Installs by renaming within the filesystem, as the current user.
///
/// Falls back to copy-then-remove when the rename fails, which covers
/// staging and install directories on different filesystems.
#[derive(Debug, Clone, Default)]
pub struct DirectRename;

impl InstallStrategy for DirectRename {
    fn name(&self) -> &str {
        "direct"
    }

    fn install(&self, staged: &Path, dest: &Path) -> Result<()> {
        if std::fs::rename(staged, dest).is_ok() {
            return Ok(());
        }

        std::fs::copy(staged, dest).map_err(|e| UpdateError::Install {
            message: format!(
                "could not copy {} to {}: {}",
                staged.display(),
                dest.display(),
                e
            ),
        })?;
        make_executable(dest).map_err(|e| UpdateError::Install {
            message: format!("could not set permissions on {}: {}", dest.display(), e),
        })?;
        std::fs::remove_file(staged).map_err(|e| UpdateError::Install {
            message: format!("could not remove staged file {}: {}", staged.display(), e),
        })?;
        Ok(())
    }
}

/// Installs through an elevation helper (`sudo mv` by default).
///
/// The helper runs with inherited stdio so it can prompt for
/// authentication on the terminal.
#[derive(Debug, Clone)]
pub struct ElevatedMove {
    helper: String,
}

impl ElevatedMove {
    /// Elevate with `sudo`.
    pub fn new() -> Self {
        Self::with_helper("sudo")
    }

    /// Elevate with a custom helper such as `doas`.
    pub fn with_helper(helper: impl Into<String>) -> Self {
        Self {
            helper: helper.into(),
        }
    }

    /// The elevation helper this strategy invokes.
    pub fn helper(&self) -> &str {
        &self.helper
    }
}

impl Default for ElevatedMove {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallStrategy for ElevatedMove {
    fn name(&self) -> &str {
        "elevated"
    }

    fn install(&self, staged: &Path, dest: &Path) -> Result<()> {
        tracing::info!(
            helper = %self.helper,
            staged = %staged.display(),
            dest = %dest.display(),
            "relocating with elevation"
        );

        let status = Command::new(&self.helper)
            .arg("mv")
            .arg(staged)
            .arg(dest)
            .status()
            .map_err(|e| UpdateError::Install {
                message: format!("could not run {}: {}", self.helper, e),
            })?;

        if !status.success() {
            return Err(UpdateError::Install {
                message: format!(
                    "{} mv exited with code {:?}",
                    self.helper,
                    status.code()
                ),
            });
        }

        Ok(())
    }
}

/// Pick a strategy for the given install directory.
///
/// Direct rename when the current user can write the directory, elevation
/// otherwise.
pub fn choose_strategy(install_dir: &Path) -> Box<dyn InstallStrategy> {
    if dir_writable(install_dir) {
        Box::new(DirectRename)
    } else {
        Box::new(ElevatedMove::new())
    }
}

/// Whether the current user can create files in `dir`, determined by
/// actually trying.
fn dir_writable(dir: &Path) -> bool {
    let candidate = dir.join(".zenup-write-check");
    match std::fs::File::create(&candidate) {
        Ok(_) => {
            let _ = std::fs::remove_file(&candidate);
            true
        }
        Err(_) => false,
    }
}
