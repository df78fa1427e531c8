//! The update flow.
//!
//! [`Updater`] wires the version probe, the release feed, the asset
//! downloader, and an install strategy into the linear flow: probe the
//! installed version, look up the latest release, and when the two tags
//! differ download, mark executable, and install.
//!
//! Each run is self-contained; nothing is remembered between runs.

use crate::config::UpdaterConfig;
use crate::download::AssetDownloader;
use crate::error::Result;
use crate::install::{self, InstallStrategy};
use crate::probe::VersionProbe;
use crate::releases::ReleaseFeed;
use crate::ui::UserInterface;

/// Installed-vs-latest comparison, with nothing installed yet.
#[derive(Debug, Clone)]
pub struct UpdateStatus {
    /// Version reported by the installed application.
    pub installed: String,
    /// Tag of the latest release in the feed.
    pub latest: String,
    /// Whether the two differ.
    pub update_available: bool,
}

/// What a completed update run did.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// Installed version and latest tag matched; nothing was touched.
    UpToDate { version: String },
    /// A new version was downloaded and installed.
    Installed { from: String, to: String },
}

/// Runs the update flow for one configured application.
pub struct Updater {
    config: UpdaterConfig,
    probe: VersionProbe,
    feed: ReleaseFeed,
    downloader: AssetDownloader,
    strategy: Box<dyn InstallStrategy>,
}

impl Updater {
    /// Create an updater.
    ///
    /// The install strategy defaults to the elevation helper; callers
    /// wanting direct or writability-based installs inject one via
    /// [`Updater::with_strategy`].
    pub fn new(config: UpdaterConfig) -> Self {
        let probe = VersionProbe::new(&config.version_command);
        let feed = ReleaseFeed::new(&config.releases_url);

        Self {
            config,
            probe,
            feed,
            downloader: AssetDownloader::new(),
            strategy: Box::new(install::ElevatedMove::new()),
        }
    }

    /// Replace the install strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn InstallStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Disable the download progress bar.
    pub fn without_progress(mut self) -> Self {
        self.downloader = self.downloader.without_progress();
        self
    }

    /// The configuration this updater runs with.
    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Compare the installed version with the latest release tag.
    ///
    /// Performs the probe and the feed lookup but never downloads.
    pub fn check(&self) -> Result<UpdateStatus> {
        let installed = self.probe.installed_version()?;
        let latest = self.feed.latest()?;

        Ok(UpdateStatus {
            update_available: latest.tag_name != installed,
            installed,
            latest: latest.tag_name,
        })
    }

    /// Run the full update flow.
    ///
    /// The install only happens when the latest tag and the installed
    /// version differ byte-for-byte; there is no version ordering.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<UpdateOutcome> {
        let app = &self.config.app_name;

        ui.message(&format!("Getting current {} version", app));
        let installed = self.probe.installed_version()?;
        ui.message(&format!("Current {} version: {}", app, installed));

        ui.message(&format!(
            "Checking {} for new releases",
            self.config.releases_url
        ));
        let latest = self.feed.latest()?;
        ui.message(&format!("Latest version found: {}", latest.tag_name));

        if latest.tag_name == installed {
            ui.success(&format!("{} is up to date", app));
            return Ok(UpdateOutcome::UpToDate { version: installed });
        }

        let url = self.config.download_url(&latest.tag_name);
        let staged = self.config.staging_path();

        ui.message(&format!("Downloading {} {} from {}", app, latest.tag_name, url));
        self.downloader.fetch_to(&url, &staged)?;
        ui.message(&format!("Downloaded to {}", staged.display()));

        install::make_executable(&staged)?;

        ui.message(&format!(
            "Installing to {} ({} strategy)",
            self.config.install_path.display(),
            self.strategy.name()
        ));
        self.strategy.install(&staged, &self.config.install_path)?;

        ui.success(&format!(
            "{} updated: {} -> {}",
            app, installed, latest.tag_name
        ));

        Ok(UpdateOutcome::Installed {
            from: installed,
            to: latest.tag_name.clone(),
        })
    }
}
