//! Per-OS locate strategies.
//!
//! Only Windows gets a full probe today. Linux and macOS deliberately
//! skip the pass, preserving the upstream capability gap; anything else
//! is unsupported outright.

use crate::channel::Channel;
use bdinstall_platform::{dir, os};
use std::path::PathBuf;

/// What the platform contributes to a locate pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Scan this base directory.
    Base(PathBuf),
    /// Leave the state untouched.
    Skip,
    /// Probing is impossible on this platform.
    Unsupported,
}

/// Platform-specific half of `locate`, selected once at startup.
pub trait LocateStrategy {
    fn probe(&self, channel: Channel) -> Probe;
}

struct Windows;

impl LocateStrategy for Windows {
    fn probe(&self, channel: Channel) -> Probe {
        match dir::user_data() {
            Some(root) => Probe::Base(root.join(channel.application_name())),
            None => Probe::Unsupported,
        }
    }
}

/// Linux and macOS: the install layout differs enough that no probe is
/// implemented yet, so the state stays Unknown.
struct Desktop;

impl LocateStrategy for Desktop {
    fn probe(&self, _channel: Channel) -> Probe {
        Probe::Skip
    }
}

struct Unsupported;

impl LocateStrategy for Unsupported {
    fn probe(&self, _channel: Channel) -> Probe {
        Probe::Unsupported
    }
}

/// Strategy for the compile-time target OS.
pub fn strategy() -> &'static dyn LocateStrategy {
    match os::detect() {
        os::OS::Windows => &Windows,
        os::OS::Linux | os::OS::Macos => &Desktop,
        os::OS::Unknown => &Unsupported,
    }
}
