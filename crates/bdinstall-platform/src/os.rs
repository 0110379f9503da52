//! Target operating system classification.
//!
//! Detection is compile-time: the installer only ever probes the OS it
//! was built for, so there is nothing to query at runtime.

/// Operating system the binary was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OS {
    Windows,
    Macos,
    Linux,
    Unknown,
}

/// Classify the compile-time target OS.
pub fn detect() -> OS {
    if cfg!(target_os = "windows") {
        OS::Windows
    } else if cfg!(target_os = "macos") {
        OS::Macos
    } else if cfg!(target_os = "linux") {
        OS::Linux
    } else {
        OS::Unknown
    }
}
