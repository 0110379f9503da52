//! Action mapping between install state and the product widget.
//!
//! The widget here is a toolkit-agnostic model: the host UI mirrors it
//! into real controls and calls back into the controller whenever the
//! user changes a selection.

use crate::channel::Channel;
use crate::discord::DiscordInstall;
use crate::state::InstallState;
use semver::Version;
use tracing::debug;

/// Action requested through the widget controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Unknown,
    RepairInstall,
    Skip,
    Uninstall,
}

/// Icon shown next to the product entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Stable,
    Ptb,
    Canary,
}

impl Icon {
    pub fn for_channel(channel: Channel) -> Self {
        match channel {
            Channel::Stable => Icon::Stable,
            Channel::Ptb => Icon::Ptb,
            Channel::Canary => Icon::Canary,
        }
    }

    pub fn asset_path(self) -> &'static str {
        match self {
            Icon::Stable => "images/logoStable",
            Icon::Ptb => "images/logoPtb",
            Icon::Canary => "images/logoCanary",
        }
    }
}

/// Which of the two action radio controls is checked. Primary keeps the
/// product as is; secondary requests an install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedControl {
    Primary,
    Secondary,
}

/// Model of one product row: display text, icon, button configuration,
/// and the user's current selections.
#[derive(Debug)]
pub struct ProductWidget {
    text: String,
    icon: Icon,
    checked: Option<CheckedControl>,
    install_enabled: bool,
    install_label: String,
    uninstall_enabled: bool,
    install: bool,
    skip: bool,
    uninstall: bool,
}

impl ProductWidget {
    fn new(text: String, icon: Icon) -> Self {
        Self {
            text,
            icon,
            checked: None,
            install_enabled: false,
            install_label: "Install".to_string(),
            uninstall_enabled: false,
            install: false,
            skip: false,
            uninstall: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }

    pub fn checked(&self) -> Option<CheckedControl> {
        self.checked
    }

    /// Check one of the radio controls, updating the selection flags
    /// the way a radio group would.
    pub fn set_checked(&mut self, control: CheckedControl) {
        self.checked = Some(control);
        match control {
            CheckedControl::Primary => {
                self.skip = true;
                self.install = false;
            }
            CheckedControl::Secondary => {
                self.install = true;
                self.skip = false;
            }
        }
    }

    pub fn set_install_btn(&mut self, enabled: bool, label: &str) {
        self.install_enabled = enabled;
        self.install_label = label.to_string();
    }

    pub fn set_uninstall_btn(&mut self, enabled: bool) {
        self.uninstall_enabled = enabled;
    }

    pub fn install_enabled(&self) -> bool {
        self.install_enabled
    }

    pub fn install_label(&self) -> &str {
        &self.install_label
    }

    pub fn uninstall_enabled(&self) -> bool {
        self.uninstall_enabled
    }

    /// Install requested.
    pub fn install(&self) -> bool {
        self.install
    }

    /// Skip requested.
    pub fn skip(&self) -> bool {
        self.skip
    }

    /// Uninstall requested.
    pub fn uninstall(&self) -> bool {
        self.uninstall
    }

    pub fn select_install(&mut self, on: bool) {
        self.install = on;
    }

    pub fn select_skip(&mut self, on: bool) {
        self.skip = on;
    }

    pub fn select_uninstall(&mut self, on: bool) {
        self.uninstall = on;
    }
}

/// Maps install state to widget configuration and widget selections
/// back to a requested [`Action`].
#[derive(Debug)]
pub struct ActionController {
    channel: Channel,
    state: InstallState,
    product_version: Option<Version>,
    core_version: Version,
    client_version: Version,
    action: Action,
    widget: Option<ProductWidget>,
}

impl ActionController {
    /// Build a controller over a resolved install.
    pub fn new(install: &DiscordInstall, core_version: Version, client_version: Version) -> Self {
        Self {
            channel: install.channel(),
            state: install.state(),
            product_version: install.latest_version().cloned(),
            core_version,
            client_version,
            action: Action::Unknown,
            widget: None,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Currently requested action.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The single product widget, created on first call and reused
    /// thereafter. Building it applies the initial state mapping and
    /// computes the initial action; later control changes flow through
    /// [`ActionController::action_change`].
    pub fn widget(&mut self) -> &mut ProductWidget {
        if self.widget.is_none() {
            self.widget = Some(self.build_widget());
            self.resolve_action(false);
        }
        self.widget.as_mut().unwrap()
    }

    fn build_widget(&self) -> ProductWidget {
        let product_version = self
            .product_version
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_default();
        let text = format!(
            "BetterDiscord v{}/{} for {} {}",
            self.core_version,
            self.client_version,
            self.channel.channel_string(),
            product_version,
        );

        let mut widget = ProductWidget::new(text, Icon::for_channel(self.channel));

        match self.state {
            InstallState::NotInstalled | InstallState::Unknown => {
                widget.set_checked(CheckedControl::Secondary);
                widget.set_install_btn(true, "Install");
                widget.set_uninstall_btn(false);
            }
            InstallState::Installed | InstallState::Broken => {
                widget.set_checked(CheckedControl::Primary);
                widget.set_install_btn(true, "Repair");
                widget.set_uninstall_btn(true);
            }
            InstallState::Installing | InstallState::Unavailable => {}
        }

        widget
    }

    /// Recompute the requested action from the widget's control state.
    ///
    /// Precedence: install, then skip, then uninstall.
    pub fn resolve_action(&mut self, debug: bool) -> Action {
        let old_action = self.action;
        let Some(widget) = &self.widget else {
            return self.action;
        };

        self.action = if widget.install() {
            Action::RepairInstall
        } else if widget.skip() {
            Action::Skip
        } else if widget.uninstall() {
            Action::Uninstall
        } else {
            Action::Unknown
        };

        if debug {
            debug!(channel = %self.channel, from = ?old_action, to = ?self.action, "action changed");
        }
        self.action
    }

    /// Widget change handler: the host UI calls this after any control
    /// change.
    pub fn action_change(&mut self) {
        self.resolve_action(false);
    }
}
