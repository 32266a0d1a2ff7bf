//! Demo configuration: widget settings plus logging.

use std::path::Path;

use ninja_ui::config::{ConfigLoadError, UiConfig};
use serde::Deserialize;
use simplelog::LevelFilter;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,

    /// Where the log is written.
    pub log_file: String,

    #[serde(flatten)]
    pub ui: UiConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            log_file: "ninja-demo.log".to_string(),
            ui: UiConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&json)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parsed log level. Unknown names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattened_ui_settings() {
        let config: DemoConfig = serde_json::from_str(
            r#"{ "log_level": "trace", "snackbar": { "duration_ms": 1000 } }"#,
        )
        .unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Trace);
        assert_eq!(config.ui.snackbar.duration_ms, 1000);
        assert_eq!(config.log_file, "ninja-demo.log");
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = DemoConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = DemoConfig::load(None).unwrap();
        assert_eq!(config.ui, UiConfig::default());
    }
}
