//! Widget configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "snackbar": { "duration_ms": 1500 }, "dropdown": { "dismiss_on_outside_click": true } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default time a snackbar message stays visible.
pub const DEFAULT_SNACKBAR_DURATION: Duration = Duration::from_millis(3000);

/// Configuration shared by all widgets of a page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Class marking the active tab pair, a showing tooltip caption and a
    /// visible snackbar.
    pub active_class: String,

    /// Class marking an open dropdown container.
    pub open_class: String,

    /// Attribute a tooltip reads its caption from.
    pub tooltip_attribute: String,

    pub snackbar: SnackbarConfig,

    pub dropdown: DropdownConfig,

    /// Class names used by convention discovery.
    pub conventions: Conventions,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            active_class: "active".to_string(),
            open_class: "open".to_string(),
            tooltip_attribute: "data-message".to_string(),
            snackbar: SnackbarConfig::default(),
            dropdown: DropdownConfig::default(),
            conventions: Conventions::default(),
        }
    }
}

impl UiConfig {
    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set how long snackbar messages stay visible.
    pub fn snackbar_duration(mut self, duration: Duration) -> Self {
        self.snackbar.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Enable or disable closing dropdowns on clicks outside them.
    pub fn dismiss_on_outside_click(mut self, dismiss: bool) -> Self {
        self.dropdown.dismiss_on_outside_click = dismiss;
        self
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn open_class(mut self, class: impl Into<String>) -> Self {
        self.open_class = class.into();
        self
    }

    pub fn tooltip_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.tooltip_attribute = attribute.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnackbarConfig {
    /// Auto-dismiss delay in milliseconds.
    pub duration_ms: u64,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_SNACKBAR_DURATION.as_millis() as u64,
        }
    }
}

impl SnackbarConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Close an open dropdown when a click lands outside its container.
    /// Off by default: dropdowns only toggle from their trigger.
    pub dismiss_on_outside_click: bool,
}

/// Class names that identify widgets and their parts during discovery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Conventions {
    pub tooltip: String,
    pub dropdown: String,
    pub trigger: String,
    pub menu: String,
    pub tabs: String,
    pub tab: String,
    pub panel: String,
    /// Class given to the tooltip caption element.
    pub caption: String,
    /// Class given to the snackbar surface.
    pub snackbar: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            tooltip: "tooltip".to_string(),
            dropdown: "dropdown".to_string(),
            trigger: "trigger".to_string(),
            menu: "content".to_string(),
            tabs: "tabs".to_string(),
            tab: "tab".to_string(),
            panel: "panel".to_string(),
            caption: "tip".to_string(),
            snackbar: "snackbar".to_string(),
        }
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
