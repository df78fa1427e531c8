//! Installed-version probe.
//!
//! Asks the installed application for its version by running its
//! version-reporting command and reading the third whitespace-delimited
//! token of the output, e.g. `1.2.3` out of `Zen Browser 1.2.3`.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Result, UpdateError};
use crate::shell::{self, CommandOptions};

/// Probes the locally installed application for its version string.
#[derive(Debug, Clone)]
pub struct VersionProbe {
    command: String,
}

impl VersionProbe {
    /// Create a probe around a version-reporting shell command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command this probe runs.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the probe and return the installed version string.
    ///
    /// Fails if the command cannot run, exits non-zero, produces no
    /// output, or produces output with no version in the expected field.
    pub fn installed_version(&self) -> Result<String> {
        let result =
            shell::execute(&self.command, &CommandOptions::captured()).map_err(|e| {
                UpdateError::Probe {
                    message: format!("could not run `{}`: {}", self.command, e),
                }
            })?;

        if !result.success {
            let stderr = result.stderr.trim();
            let detail = if stderr.is_empty() {
                String::new()
            } else {
                format!(": {}", stderr)
            };
            return Err(UpdateError::Probe {
                message: format!(
                    "`{}` exited with code {:?}{}",
                    self.command, result.exit_code, detail
                ),
            });
        }

        if result.stdout.trim().is_empty() {
            return Err(UpdateError::Probe {
                message: format!("`{}` produced no output", self.command),
            });
        }

        let version = extract_version(&result.stdout).ok_or_else(|| UpdateError::Probe {
            message: format!(
                "`{}` output has no version field: {:?}",
                self.command,
                result.stdout.trim_end()
            ),
        })?;

        tracing::debug!(version = %version, "probed installed version");
        Ok(version)
    }
}

/// Extract the version from version-command output.
///
/// The version is the third whitespace-delimited token (`Zen Browser
/// 1.2.3` reports `1.2.3`), with any trailing newline already gone by
/// virtue of the whitespace split. The token must also look like a
/// version number; a third token of prose is treated as no version.
pub fn extract_version(output: &str) -> Option<String> {
    let token = output.split_whitespace().nth(2)?;
    if looks_like_version(token) {
        Some(token.to_string())
    } else {
        None
    }
}

/// Whether a token is shaped like a version: digits and dots with an
/// optional `v` prefix and an optional short suffix such as `1.2.3b` or
/// `1.2.3-a.1`.
fn looks_like_version(token: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^v?\d+(\.\d+)*[a-z]?(-[0-9A-Za-z.]+)?$").expect("version pattern compiles")
    });
    re.is_match(token)
}
