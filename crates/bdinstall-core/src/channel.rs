//! Discord release channels.

use std::fmt;

/// Release channel of the targeted Discord install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    Stable,
    Ptb,
    Canary,
}

impl Channel {
    /// Parse a channel name. Unknown values behave as the default
    /// channel.
    pub fn parse(s: &str) -> Self {
        match s {
            "ptb" => Channel::Ptb,
            "canary" => Channel::Canary,
            _ => Channel::Stable,
        }
    }

    /// Application name used to derive the platform storage path.
    ///
    /// Pure function of channel and compile-time target OS.
    pub fn application_name(self) -> &'static str {
        if cfg!(any(target_os = "windows", target_os = "linux")) {
            match self {
                Channel::Stable => "discord",
                Channel::Ptb => "discordptb",
                Channel::Canary => "discordcanary",
            }
        } else if cfg!(target_os = "macos") {
            match self {
                Channel::Stable => "Discord.app",
                Channel::Ptb => "Discord PTB.app",
                Channel::Canary => "Discord Canary.app",
            }
        } else {
            "Unknown"
        }
    }

    /// Product name shown to the user.
    pub fn channel_string(self) -> &'static str {
        match self {
            Channel::Stable => "Discord",
            Channel::Ptb => "Discord PTB",
            Channel::Canary => "Discord Canary",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Stable => "stable",
            Channel::Ptb => "ptb",
            Channel::Canary => "canary",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::Channel;

    #[test]
    fn test_parse_known_channels() {
        assert_eq!(Channel::parse(""), Channel::Stable);
        assert_eq!(Channel::parse("ptb"), Channel::Ptb);
        assert_eq!(Channel::parse("canary"), Channel::Canary);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_stable() {
        assert_eq!(Channel::parse("beta"), Channel::Stable);
        assert_eq!(Channel::parse("PTB"), Channel::Stable);
    }

    #[test]
    fn test_channel_string() {
        assert_eq!(Channel::Stable.channel_string(), "Discord");
        assert_eq!(Channel::Ptb.channel_string(), "Discord PTB");
        assert_eq!(Channel::Canary.channel_string(), "Discord Canary");
    }

    #[test]
    fn test_application_name_per_target() {
        let name = Channel::Canary.application_name();
        #[cfg(any(target_os = "windows", target_os = "linux"))]
        assert_eq!(name, "discordcanary");
        #[cfg(target_os = "macos")]
        assert_eq!(name, "Discord Canary.app");
        #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
        assert_eq!(name, "Unknown");
    }

    #[test]
    fn test_application_name_stable() {
        let name = Channel::Stable.application_name();
        #[cfg(any(target_os = "windows", target_os = "linux"))]
        assert_eq!(name, "discord");
        #[cfg(target_os = "macos")]
        assert_eq!(name, "Discord.app");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Channel::Stable.to_string(), "stable");
        assert_eq!(Channel::Canary.to_string(), "canary");
    }
}
