//! Updater configuration.
//!
//! Every path and URL the update flow touches lives in [`UpdaterConfig`],
//! resolved at startup and handed to the components that need it. There is
//! no configuration file: the defaults describe the Zen browser AppImage,
//! and the CLI can override individual fields.

use std::path::{Path, PathBuf};

/// Resolved configuration for one updater run.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Display name of the managed application.
    pub app_name: String,

    /// Releases-listing endpoint, expected to return a JSON array.
    pub releases_url: String,

    /// Base URL the per-release asset URL is built from.
    pub download_base_url: String,

    /// File name of the release asset.
    pub asset_name: String,

    /// Directory the asset is staged in before install.
    pub download_dir: PathBuf,

    /// Final location of the installed binary.
    pub install_path: PathBuf,

    /// Shell command whose output reports the installed version.
    pub version_command: String,
}

impl UpdaterConfig {
    /// Default configuration for the Zen browser AppImage.
    ///
    /// The download directory resolves to the platform Downloads folder,
    /// falling back to `~/Downloads` when the platform does not report one.
    pub fn default_for_zen() -> Self {
        Self {
            app_name: "Zen".to_string(),
            releases_url: "https://api.github.com/repos/zen-browser/desktop/releases".to_string(),
            download_base_url: "https://github.com/zen-browser/desktop/releases/download"
                .to_string(),
            asset_name: "zen-x86_64.AppImage".to_string(),
            download_dir: default_download_dir(),
            install_path: PathBuf::from("/usr/local/bin/zen"),
            version_command: "zen --version".to_string(),
        }
    }

    /// URL of the asset attached to the given release tag.
    pub fn download_url(&self, tag: &str) -> String {
        format!(
            "{}/{}/{}",
            self.download_base_url.trim_end_matches('/'),
            tag,
            self.asset_name
        )
    }

    /// Path the asset is written to before being relocated.
    pub fn staging_path(&self) -> PathBuf {
        self.download_dir.join(&self.asset_name)
    }

    /// Directory the installed binary lives in.
    pub fn install_dir(&self) -> &Path {
        self.install_path.parent().unwrap_or(Path::new("/"))
    }
}

/// Resolve the directory downloads are staged in.
fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}
