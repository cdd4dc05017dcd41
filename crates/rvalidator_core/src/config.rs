//! Adapter configuration.
//!
//! Configuration can be built in code or loaded from YAML/TOML:
//!
//! ```rust
//! use rvalidator_core::MessageConfig;
//!
//! let config = MessageConfig::from_toml_str(r#"
//! unknown_field_message = "No such field"
//! default_template = "{field} is invalid ({rule})"
//! "#).unwrap();
//!
//! assert_eq!(config.render_default("age", "range"), "age is invalid (range)");
//! ```

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sentinel returned when a failing field is not described by the schema.
pub const UNKNOWN_FIELD_MESSAGE: &str = "Unknown field";

/// Template for the engine's default message.
pub const DEFAULT_TEMPLATE: &str = "Field validation for '{field}' failed on the '{rule}' tag";

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Message resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageConfig {
    /// Returned when a failure names a field the schema does not describe
    pub unknown_field_message: String,

    /// Default message template; `{field}` and `{rule}` are substituted
    pub default_template: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            unknown_field_message: UNKNOWN_FIELD_MESSAGE.to_string(),
            default_template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl MessageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unknown field sentinel.
    pub fn with_unknown_field_message(mut self, message: impl Into<String>) -> Self {
        self.unknown_field_message = message.into();
        self
    }

    /// Sets the default message template.
    pub fn with_default_template(mut self, template: impl Into<String>) -> Self {
        self.default_template = template.into();
        self
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, picking the parser from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Yaml => Self::from_yaml_str(&content),
            ConfigFormat::Toml => Self::from_toml_str(&content),
        }
    }

    /// Checks the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unknown_field_message.is_empty() {
            return Err(ConfigError::Invalid(
                "unknown_field_message cannot be empty".to_string(),
            ));
        }

        if !self.default_template.contains("{field}") {
            return Err(ConfigError::Invalid(
                "default_template must contain a {field} placeholder".to_string(),
            ));
        }

        Ok(())
    }

    /// Formats the default message for a field and rule.
    pub fn render_default(&self, field: &str, rule: &str) -> String {
        render_template(&self.default_template, field, rule)
    }
}

/// Substitutes `{field}` and `{rule}` in a message template.
pub fn render_template(template: &str, field: &str, rule: &str) -> String {
    template.replace("{field}", field).replace("{rule}", rule)
}
