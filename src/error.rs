//! Error types for zenup operations.
//!
//! This module defines [`UpdateError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `UpdateError` for stage-specific failures that map to exit codes
//! - Use `anyhow::Error` (via `UpdateError::Other`) for unexpected errors
//! - Every failure is terminal: no stage retries, no partial-result recovery

use thiserror::Error;

/// Core error type for zenup operations.
///
/// Each variant corresponds to one stage of the update flow, so the exit
/// code reported by the binary identifies where a run failed.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The installed application's version could not be determined.
    #[error("Version probe failed: {message}")]
    Probe { message: String },

    /// An HTTP request completed with an unexpected status.
    #[error("Expected HTTP 200 but got HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// An HTTP request failed to complete.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The release feed could not be interpreted.
    #[error("Bad release data: {message}")]
    BadData { message: String },

    /// IO error wrapper (staging file, permission bits).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The install strategy failed to relocate the staged file.
    #[error("Install failed: {message}")]
    Install { message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UpdateError {
    /// Exit code identifying the failed stage.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Probe { .. } => 2,
            Self::HttpStatus { .. } | Self::Transport { .. } => 3,
            Self::BadData { .. } => 4,
            Self::Io(_) => 5,
            Self::Install { .. } => 6,
            Self::Other(_) => 1,
        }
    }
}

/// Result type alias for zenup operations.
pub type Result<T> = std::result::Result<T, UpdateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_error_displays_message() {
        let err = UpdateError::Probe {
            message: "produced no output".into(),
        };
        assert!(err.to_string().contains("produced no output"));
    }

    #[test]
    fn http_status_error_names_status_and_url() {
        let err = UpdateError::HttpStatus {
            status: 404,
            url: "https://api.example.com/releases".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://api.example.com/releases"));
    }

    #[test]
    fn bad_data_error_displays_message() {
        let err = UpdateError::BadData {
            message: "top-level value is not an array".into(),
        };
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn install_error_displays_message() {
        let err = UpdateError::Install {
            message: "sudo mv exited with code 1".into(),
        };
        assert!(err.to_string().contains("sudo mv"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: UpdateError = io_err.into();
        assert!(matches!(err, UpdateError::Io(_)));
    }

    #[test]
    fn exit_codes_identify_stages() {
        assert_eq!(
            UpdateError::Probe {
                message: String::new()
            }
            .exit_code(),
            2
        );
        assert_eq!(
            UpdateError::HttpStatus {
                status: 500,
                url: String::new()
            }
            .exit_code(),
            3
        );
        assert_eq!(
            UpdateError::BadData {
                message: String::new()
            }
            .exit_code(),
            4
        );
        let io = UpdateError::Io(std::io::Error::other("x"));
        assert_eq!(io.exit_code(), 5);
        assert_eq!(
            UpdateError::Install {
                message: String::new()
            }
            .exit_code(),
            6
        );
        assert_eq!(
            UpdateError::Other(anyhow::anyhow!("unexpected")).exit_code(),
            1
        );
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(UpdateError::BadData {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
