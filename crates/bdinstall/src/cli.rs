//! Command-line surface.

use anyhow::{Context, Result, bail};
use bdinstall_archive::Zip;
use bdinstall_core::{Channel, DiscordInstall, InstallState};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bdinstall", version, about = "BetterDiscord installer utility")]
pub struct App {
    /// Log at debug level by default.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Status(Status),
    Install(Install),
    Extract(Extract),
}

impl App {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Status(cmd) => cmd.run(),
            Command::Install(cmd) => cmd.run(),
            Command::Extract(cmd) => cmd.run(),
        }
    }
}

fn locate(channel: &str) -> DiscordInstall {
    let mut install = DiscordInstall::new(Channel::parse(channel));
    install.locate();
    install
}

/// Report the install state for a channel.
#[derive(Debug, Args)]
struct Status {
    /// Release channel: stable, ptb or canary.
    #[arg(long, default_value = "")]
    channel: String,
}

impl Status {
    fn run(self) -> Result<()> {
        let install = locate(&self.channel);
        install.debug_report();

        println!(
            "{}: {}",
            install.channel().channel_string(),
            install.state()
        );
        if let Some(version) = install.latest_version() {
            println!("  discord version: {version}");
        }
        if let Some(bd) = install.installed_version() {
            println!("  betterdiscord: v{bd}");
        }
        Ok(())
    }
}

/// Write the injection stub for a channel.
#[derive(Debug, Args)]
struct Install {
    /// Release channel: stable, ptb or canary.
    #[arg(long, default_value = "")]
    channel: String,
}

impl Install {
    fn run(self) -> Result<()> {
        let mut install = locate(&self.channel);
        let product = install.channel().channel_string();

        if install.state() == InstallState::Unavailable {
            bail!("{product} is not available on this machine");
        }

        let verb = if install.state().is_installed() {
            "repaired"
        } else {
            "installed"
        };
        install
            .inject()
            .with_context(|| format!("injecting into {product}"))?;
        println!("{product}: {verb}");
        Ok(())
    }
}

/// Extract a zip archive through 7z.
#[derive(Debug, Args)]
struct Extract {
    /// Archive to extract.
    archive: PathBuf,
    /// Destination directory.
    dest: PathBuf,
}

impl Extract {
    fn run(self) -> Result<()> {
        Zip::new(&self.archive, &self.dest)
            .extract(|line| println!("{line}"))
            .with_context(|| format!("extracting {}", self.archive.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        App::command().debug_assert();
    }
}
