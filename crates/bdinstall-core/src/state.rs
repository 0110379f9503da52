//! Install state classification.

use std::fmt;

/// Result of a locate pass over one channel's install.
///
/// Set once per pass; only a successful inject mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallState {
    #[default]
    Unknown,
    NotInstalled,
    Installed,
    Broken,
    Installing,
    Unavailable,
}

impl InstallState {
    pub fn is_installed(self) -> bool {
        self == InstallState::Installed
    }
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstallState::Unknown => "unknown",
            InstallState::NotInstalled => "not installed",
            InstallState::Installed => "installed",
            InstallState::Broken => "broken",
            InstallState::Installing => "installing",
            InstallState::Unavailable => "unavailable",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::InstallState;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(InstallState::default(), InstallState::Unknown);
    }

    #[test]
    fn test_is_installed() {
        assert!(InstallState::Installed.is_installed());
        assert!(!InstallState::NotInstalled.is_installed());
        assert!(!InstallState::Broken.is_installed());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(InstallState::Unavailable.to_string(), "unavailable");
        assert_eq!(InstallState::NotInstalled.to_string(), "not installed");
    }
}
