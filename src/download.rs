//! Release asset download.
//!
//! Streams the asset for a release tag to the staging file. The write is
//! truncate-create: a transport failure mid-stream leaves a truncated
//! file behind and the run aborts, matching the no-resume contract.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, UpdateError};

/// Downloads release assets to local files.
pub struct AssetDownloader {
    client: reqwest::blocking::Client,
    show_progress: bool,
}

impl AssetDownloader {
    /// Create a downloader.
    ///
    /// Redirects are followed. Only the connection attempt is bounded by a
    /// timeout; the transfer itself runs for as long as the server keeps
    /// sending, since assets can be large.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("zenup")
                .connect_timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            show_progress: true,
        }
    }

    /// Disable the progress bar (quiet mode).
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Download `url` into `dest`, truncating any existing file.
    ///
    /// Returns the number of bytes written.
    pub fn fetch_to(&self, url: &str, dest: &Path) -> Result<u64> {
        tracing::info!(url, dest = %dest.display(), "downloading asset");

        let mut response =
            self.client
                .get(url)
                .send()
                .map_err(|source| UpdateError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(UpdateError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(dest)?;

        let bar = if self.show_progress {
            download_bar(response.content_length())
        } else {
            ProgressBar::hidden()
        };

        let mut writer = bar.wrap_write(file);
        let written = response
            .copy_to(&mut writer)
            .map_err(|source| UpdateError::Transport {
                url: url.to_string(),
                source,
            })?;
        bar.finish_and_clear();

        tracing::debug!(bytes = written, "asset written");
        Ok(written)
    }
}

impl Default for AssetDownloader {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress bar for a transfer of (maybe) known length.
fn download_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
                    .unwrap(),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {bytes}")
                    .unwrap(),
            );
            bar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn quiet_downloader() -> AssetDownloader {
        AssetDownloader::new().without_progress()
    }

    #[test]
    fn fetch_writes_body_to_destination() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/assets/app.AppImage");
            then.status(200).body("binary-bytes-here");
        });

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("app.AppImage");

        let written = quiet_downloader()
            .fetch_to(&server.url("/assets/app.AppImage"), &dest)
            .unwrap();

        assert_eq!(written, 17);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "binary-bytes-here");
    }

    #[test]
    fn fetch_truncates_existing_file() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/asset");
            then.status(200).body("new");
        });

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("asset");
        std::fs::write(&dest, "a much longer previous download").unwrap();

        quiet_downloader()
            .fetch_to(&server.url("/asset"), &dest)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn fetch_creates_missing_download_dir() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/asset");
            then.status(200).body("data");
        });

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("nested/dir/asset");

        quiet_downloader()
            .fetch_to(&server.url("/asset"), &dest)
            .unwrap();

        assert!(dest.exists());
    }

    #[test]
    fn non_200_aborts_without_writing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/asset");
            then.status(404).body("Not Found");
        });

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("asset");

        let err = quiet_downloader()
            .fetch_to(&server.url("/asset"), &dest)
            .unwrap_err();

        assert!(matches!(err, UpdateError::HttpStatus { status: 404, .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn redirect_is_followed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/moved");
            then.status(302)
                .header("location", server.url("/final"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/final");
            then.status(200).body("followed");
        });

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("asset");

        quiet_downloader()
            .fetch_to(&server.url("/moved"), &dest)
            .unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "followed");
    }

    #[test]
    fn connection_failure_is_transport_error() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("asset");

        let err = quiet_downloader()
            .fetch_to("http://127.0.0.1:1/asset", &dest)
            .unwrap_err();

        assert!(matches!(err, UpdateError::Transport { .. }));
    }
}
