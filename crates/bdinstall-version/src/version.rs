//! Lenient dotted-triple parsing for version directory names.

use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;
use thiserror::Error;

static LOOSE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)(?:\.(?<minor>[0-9]+))?(?:\.(?<patch>[0-9]+))?$").unwrap()
});

#[derive(Debug, Error)]
#[error("invalid version string: {0}")]
pub struct VersionError(pub String);

/// Parse a dotted numeric version, padding missing components with zero.
///
/// Accepts `1`, `1.0`, and `1.0.5` as well as full semver strings.
pub fn parse_loose(s: &str) -> Result<Version, VersionError> {
    let s = s.trim();
    if let Ok(v) = Version::parse(s) {
        return Ok(v);
    }

    let caps = LOOSE_REGEX
        .captures(s)
        .ok_or_else(|| VersionError(s.to_string()))?;
    let part = |name: &str| {
        caps.name(name)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    Ok(Version::new(part("major"), part("minor"), part("patch")))
}

/// Parse the version carried by a Discord install directory name.
///
/// Names of the form `app-<version>` (exactly one segment after the
/// prefix) carry the version in that segment; any other name is parsed
/// whole.
pub fn from_dir_name(name: &str) -> Result<Version, VersionError> {
    if !name.starts_with("app-") {
        return parse_loose(name);
    }

    let split: Vec<&str> = name.split('-').collect();
    if split.len() != 2 {
        return parse_loose(name);
    }
    parse_loose(split[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_triple() {
        assert_eq!(parse_loose("1.0.5").unwrap(), Version::new(1, 0, 5));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(parse_loose("1").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse_loose("1.2").unwrap(), Version::new(1, 2, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_loose("resources").is_err());
        assert!(parse_loose("").is_err());
        assert!(parse_loose("1.0.x").is_err());
    }

    #[test]
    fn test_dir_name_with_app_prefix() {
        assert_eq!(from_dir_name("app-1.0.5").unwrap(), Version::new(1, 0, 5));
    }

    #[test]
    fn test_dir_name_plain_version() {
        assert_eq!(from_dir_name("0.9.9").unwrap(), Version::new(0, 9, 9));
    }

    #[test]
    fn test_dir_name_extra_dashes_parsed_whole() {
        // Three segments do not match the app-<version> convention, and
        // the whole name is not a version either.
        assert!(from_dir_name("app-1.0.5-beta").is_err());
    }

    #[test]
    fn test_dir_name_unparseable() {
        assert!(from_dir_name("packages").is_err());
        assert!(from_dir_name("app-").is_err());
    }
}
