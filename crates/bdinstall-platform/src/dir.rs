//! Standard user directories, resolved per target OS.
//!
//! All functions are pure lookups: callers pass the application name and
//! join it onto the returned root themselves. No process-wide state is
//! consulted beyond the environment.

use std::env;
use std::path::PathBuf;

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// Per-user configuration root (`%APPDATA%`, `~/Library/Application
/// Support`, or `$XDG_CONFIG_HOME`).
pub fn user_config() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".config")))
    }
}

/// Per-user data root (`%LOCALAPPDATA%`, `~/Library/Application
/// Support`, or `$XDG_DATA_HOME`). Discord's Squirrel installs live
/// under this root on Windows.
pub fn user_data() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("LOCALAPPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".local/share")))
    }
}

/// Root for installed application bundles. Only meaningful on macOS,
/// where `.app` bundles live under `/Applications`.
pub fn applications() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        Some(PathBuf::from("/Applications"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_home_is_absolute() {
        if let Some(home) = user_home() {
            assert!(home.is_absolute());
        }
    }

    #[test]
    fn test_user_data_respects_env_override() {
        // The non-Windows roots come straight from the environment, so
        // an override must show up in the result.
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            unsafe { env::set_var("XDG_DATA_HOME", "/tmp/bdinstall-data") };
            assert_eq!(user_data(), Some(PathBuf::from("/tmp/bdinstall-data")));
            unsafe { env::remove_var("XDG_DATA_HOME") };
        }
        #[cfg(target_os = "windows")]
        if let Some(data) = user_data() {
            assert!(data.to_string_lossy().to_lowercase().contains("appdata"));
        }
    }

    #[test]
    fn test_applications_only_on_macos() {
        let apps = applications();
        #[cfg(target_os = "macos")]
        assert_eq!(apps, Some(PathBuf::from("/Applications")));
        #[cfg(not(target_os = "macos"))]
        assert!(apps.is_none());
    }

    #[test]
    fn test_roots_are_not_empty() {
        for dir in [user_home(), user_config(), user_data()].into_iter().flatten() {
            assert!(!dir.as_os_str().is_empty());
        }
    }
}
