// File: src/config.rs
// Purpose: Presentation defaults parsed from livefield.toml

use crate::field::{FieldConfig, DEFAULT_INVALID_MESSAGE, DEFAULT_REQUIRED_MESSAGE, DEFAULT_WARNING_RATIO};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "livefield.toml";

/// Application configuration
///
/// Only defaults for messages, the character counter and logging live
/// here. Field rules are always declared in code.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub counter: CounterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fallback messages for fields that don't set their own
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesConfig {
    #[serde(default = "default_required")]
    pub required: String,

    #[serde(default = "default_invalid")]
    pub invalid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CounterConfig {
    /// Fraction of the max length above which the counter warns
    #[serde(default = "default_warning_ratio")]
    pub warning_ratio: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_required() -> String {
    DEFAULT_REQUIRED_MESSAGE.to_string()
}

fn default_invalid() -> String {
    DEFAULT_INVALID_MESSAGE.to_string()
}

fn default_warning_ratio() -> f32 {
    DEFAULT_WARNING_RATIO
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            required: default_required(),
            invalid: default_invalid(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            warning_ratio: default_warning_ratio(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        anyhow::ensure!(
            (0.0..=1.0).contains(&config.counter.warning_ratio),
            "counter.warning_ratio must be between 0 and 1, got {}",
            config.counter.warning_ratio
        );

        Ok(config)
    }

    /// Load configuration from default path (./livefield.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// A field seeded with this configuration's defaults.
    pub fn field(&self, name: impl Into<String>) -> FieldConfig {
        FieldConfig::new(name)
            .required_message(self.messages.required.clone())
            .error_message(self.messages.invalid.clone())
            .warning_ratio(self.counter.warning_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.messages.required, DEFAULT_REQUIRED_MESSAGE);
        assert_eq!(config.counter.warning_ratio, 0.8);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [messages]
            required = "Please fill this in"

            [counter]
            warning_ratio = 0.5
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.messages.required, "Please fill this in");
        assert_eq!(config.messages.invalid, DEFAULT_INVALID_MESSAGE);
        assert_eq!(config.counter.warning_ratio, 0.5);
    }

    #[test]
    fn test_field_uses_config_messages() {
        let mut config = Config::default();
        config.messages.required = "Needed".to_string();
        let field = config.field("x").required();
        assert_eq!(field.required_message, "Needed");
        assert_eq!(field.label, "x");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("/nonexistent/livefield.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_rejects_bad_ratio() {
        let path = std::env::temp_dir().join(format!("livefield-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[counter]\nwarning_ratio = 3.0").unwrap();
        drop(file);

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("warning_ratio"));
        fs::remove_file(&path).unwrap();
    }
}
