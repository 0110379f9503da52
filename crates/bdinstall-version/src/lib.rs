//! Version parsing and newest-version selection.
//!
//! Discord's Squirrel installs keep one directory per shipped version,
//! named either `1.0.5` or `app-1.0.5`. This crate turns those names
//! into comparable versions and picks the newest one out of a scan.

pub use self::select::{VersionedDir, newest};
pub use self::version::{VersionError, from_dir_name, parse_loose};

mod select;
mod version;
