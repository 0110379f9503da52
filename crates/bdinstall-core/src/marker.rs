//! The `bd.json` marker left behind by a completed install.
//!
//! Presence of the file is what drives state classification; the fields
//! inside are informational and a malformed marker is tolerated.

use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const MARKER_FILE: &str = "bd.json";

/// Parsed marker contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Marker {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// Whether the marker file exists inside `app_dir`.
pub fn exists(app_dir: &Path) -> bool {
    app_dir.join(MARKER_FILE).is_file()
}

/// Read and parse the marker inside `app_dir`.
pub fn read(app_dir: &Path) -> Option<Marker> {
    let raw = fs::read_to_string(app_dir.join(MARKER_FILE)).ok()?;
    serde_json::from_str(&raw).ok()
}
