//! Install-state resolution and action mapping.
//!
//! # Architecture
//!
//! - `channel.rs` - Release channel names and storage identifiers
//! - `locate.rs` - Per-OS locate strategies
//! - `discord.rs` - State resolution and stub injection
//! - `marker.rs` - The `bd.json` marker left by a completed install
//! - `action.rs` - Widget model and action mapping

pub use action::{Action, ActionController, CheckedControl, Icon, ProductWidget};
pub use channel::Channel;
pub use discord::{DiscordInstall, InjectError, STUB};
pub use marker::{MARKER_FILE, Marker};
pub use state::InstallState;

pub mod action;
mod channel;
mod discord;
pub mod locate;
pub mod marker;
mod state;
