//! Install-state resolution for one Discord channel.

use crate::channel::Channel;
use crate::locate::{self, Probe};
use crate::marker;
use crate::state::InstallState;
use bdinstall_version::{VersionedDir, from_dir_name, newest};
use semver::Version;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Injection stub written to `resources/app/index.js`. Opaque payload;
/// the installer only copies it into place.
pub const STUB: &str = include_str!("stub.js");

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("no app directory resolved; locate must run first")]
    Unresolved,

    #[error("failed to create app directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write injection stub '{path}': {source}")]
    WriteStub { path: PathBuf, source: io::Error },
}

/// One channel's install, classified by [`DiscordInstall::locate`].
///
/// Single-threaded by design: one instance per channel, driven from the
/// host UI thread.
#[derive(Debug)]
pub struct DiscordInstall {
    channel: Channel,
    state: InstallState,
    latest_version: Option<Version>,
    base_dir: Option<PathBuf>,
    app_dir: Option<PathBuf>,
}

impl DiscordInstall {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            state: InstallState::Unknown,
            latest_version: None,
            base_dir: None,
            app_dir: None,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn state(&self) -> InstallState {
        self.state
    }

    /// Discord version of the selected install directory.
    pub fn latest_version(&self) -> Option<&Version> {
        self.latest_version.as_ref()
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn app_dir(&self) -> Option<&Path> {
        self.app_dir.as_deref()
    }

    /// Run the platform locate pass once and classify the result.
    pub fn locate(&mut self) {
        match locate::strategy().probe(self.channel) {
            Probe::Base(base) => self.locate_at(&base),
            Probe::Skip => {}
            Probe::Unsupported => self.state = InstallState::Unavailable,
        }
    }

    /// Scan `base` for versioned install directories and classify.
    ///
    /// Split out from [`DiscordInstall::locate`] so the scan can run
    /// against any directory, whatever OS the tests run on.
    pub fn locate_at(&mut self, base: &Path) {
        if !base.is_dir() {
            self.state = InstallState::Unavailable;
            return;
        }

        let Some(latest) = newest(versioned_dirs(base)) else {
            debug!(channel = %self.channel, base = %base.display(), "no versioned install directories");
            self.state = InstallState::Unavailable;
            return;
        };

        debug!(channel = %self.channel, version = %latest.version, "selected install directory");
        self.base_dir = Some(base.to_path_buf());
        self.latest_version = Some(latest.version);

        let resources = latest.path.join("resources");
        if !resources.is_dir() {
            self.state = InstallState::Unavailable;
            return;
        }

        let app = resources.join("app");
        self.app_dir = Some(app.clone());

        if !app.is_dir() || !marker::exists(&app) {
            self.state = InstallState::NotInstalled;
            return;
        }
        self.state = InstallState::Installed;
    }

    /// Write the injection stub into the app directory.
    ///
    /// Creates the directory when absent. No rollback: a created
    /// directory is left behind when the stub write fails, and state
    /// only changes on success.
    pub fn inject(&mut self) -> Result<(), InjectError> {
        let app = self.app_dir.clone().ok_or(InjectError::Unresolved)?;

        if !app.is_dir() {
            fs::create_dir(&app).map_err(|source| InjectError::CreateDir {
                path: app.clone(),
                source,
            })?;
        }

        let stub_path = app.join("index.js");
        fs::write(&stub_path, STUB).map_err(|source| InjectError::WriteStub {
            path: stub_path.clone(),
            source,
        })?;

        debug!(channel = %self.channel, path = %stub_path.display(), "injection stub written");
        self.state = InstallState::Installed;
        Ok(())
    }

    /// Installed BetterDiscord version, when the marker carries one.
    pub fn installed_version(&self) -> Option<String> {
        let app = self.app_dir.as_deref()?;
        marker::read(app)?.version
    }

    /// Emit a one-shot diagnostic summary for this channel.
    pub fn debug_report(&self) {
        debug!(
            application = self.channel.application_name(),
            app_dir = ?self.app_dir,
            installed = ?self.installed_version(),
            state = %self.state,
            "install summary"
        );
    }
}

/// Immediate subdirectories of `base` that carry a parseable version.
///
/// Unparseable names are dropped here, so they can never win the
/// newest-version selection.
fn versioned_dirs(base: &Path) -> Vec<VersionedDir> {
    let Ok(entries) = fs::read_dir(base) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name();
            from_dir_name(&name.to_string_lossy())
                .ok()
                .map(|version| VersionedDir::new(version, entry.path()))
        })
        .collect()
}
