//! Newest-version selection over scanned directories.

use semver::Version;
use std::path::PathBuf;

/// A parsed version paired with the directory that carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedDir {
    pub version: Version,
    pub path: PathBuf,
}

impl VersionedDir {
    pub fn new(version: Version, path: impl Into<PathBuf>) -> Self {
        Self {
            version,
            path: path.into(),
        }
    }
}

/// Pick the entry with the strictly greatest version.
///
/// Ties keep the earliest entry; an empty scan yields `None`.
pub fn newest<I>(dirs: I) -> Option<VersionedDir>
where
    I: IntoIterator<Item = VersionedDir>,
{
    let mut best: Option<VersionedDir> = None;
    for dir in dirs {
        match &best {
            Some(b) if dir.version <= b.version => {}
            _ => best = Some(dir),
        }
    }
    best
}
