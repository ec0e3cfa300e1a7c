//! Engine configuration and shortcode kinds.

use std::fmt;
use std::str::FromStr;

/// A shortcode kind handled by the engine.
///
/// [`ShortcodeKind::ALL`] lists the kinds in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcodeKind {
    /// `[button]...[/button]`
    Button,
    /// `[alert]...[/alert]`
    Alert,
    /// `[gallery]`
    Gallery,
    /// `[tabs]...[/tabs]`
    Tabs,
    /// `[accordion]...[/accordion]`
    Accordion,
    /// `[countdown]`
    Countdown,
    /// `[contact_form]`
    ContactForm,
}

impl ShortcodeKind {
    /// All kinds in the order the engine applies them.
    pub const ALL: [Self; 7] = [
        Self::Button,
        Self::Alert,
        Self::Gallery,
        Self::Tabs,
        Self::Accordion,
        Self::Countdown,
        Self::ContactForm,
    ];

    /// Tag keyword as written in content.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Alert => "alert",
            Self::Gallery => "gallery",
            Self::Tabs => "tabs",
            Self::Accordion => "accordion",
            Self::Countdown => "countdown",
            Self::ContactForm => "contact_form",
        }
    }
}

impl fmt::Display for ShortcodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized shortcode kind.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown shortcode kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ShortcodeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}

/// Per-kind switches controlling which stages run.
///
/// Every stage is enabled by default. A disabled stage is skipped entirely,
/// leaving its tags in the output as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[allow(clippy::struct_excessive_bools)]
pub struct EngineConfig {
    /// Expand `[button]` tags.
    pub enable_buttons: bool,
    /// Expand `[alert]` tags.
    pub enable_alerts: bool,
    /// Expand `[gallery]` tags.
    pub enable_gallery: bool,
    /// Expand `[tabs]` tags.
    pub enable_tabs: bool,
    /// Expand `[accordion]` tags.
    pub enable_accordion: bool,
    /// Expand `[countdown]` tags.
    pub enable_countdown: bool,
    /// Expand `[contact_form]` tags.
    pub enable_contact_form: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enable_buttons: true,
            enable_alerts: true,
            enable_gallery: true,
            enable_tabs: true,
            enable_accordion: true,
            enable_countdown: true,
            enable_contact_form: true,
        }
    }
}

impl EngineConfig {
    /// Configuration with every stage disabled.
    #[must_use]
    pub fn all_disabled() -> Self {
        Self {
            enable_buttons: false,
            enable_alerts: false,
            enable_gallery: false,
            enable_tabs: false,
            enable_accordion: false,
            enable_countdown: false,
            enable_contact_form: false,
        }
    }

    /// Whether the stage for `kind` runs.
    #[must_use]
    pub fn is_enabled(&self, kind: ShortcodeKind) -> bool {
        match kind {
            ShortcodeKind::Button => self.enable_buttons,
            ShortcodeKind::Alert => self.enable_alerts,
            ShortcodeKind::Gallery => self.enable_gallery,
            ShortcodeKind::Tabs => self.enable_tabs,
            ShortcodeKind::Accordion => self.enable_accordion,
            ShortcodeKind::Countdown => self.enable_countdown,
            ShortcodeKind::ContactForm => self.enable_contact_form,
        }
    }

    /// Enable or disable the stage for `kind`.
    pub fn set_enabled(&mut self, kind: ShortcodeKind, enabled: bool) {
        let flag = match kind {
            ShortcodeKind::Button => &mut self.enable_buttons,
            ShortcodeKind::Alert => &mut self.enable_alerts,
            ShortcodeKind::Gallery => &mut self.enable_gallery,
            ShortcodeKind::Tabs => &mut self.enable_tabs,
            ShortcodeKind::Accordion => &mut self.enable_accordion,
            ShortcodeKind::Countdown => &mut self.enable_countdown,
            ShortcodeKind::ContactForm => &mut self.enable_contact_form,
        };
        *flag = enabled;
    }

    /// Builder-style variant of [`set_enabled`](Self::set_enabled).
    #[must_use]
    pub fn with_enabled(mut self, kind: ShortcodeKind, enabled: bool) -> Self {
        self.set_enabled(kind, enabled);
        self
    }
}
