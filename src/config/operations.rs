//! Config loading, validation, and utility operations.

use super::model::DeviceInfoConfig;
use crate::error::{DevctlError, Result};
use std::path::Path;
use std::time::Duration;

impl DeviceInfoConfig {
    /// Load config from a JSON or YAML file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML; everything else
    /// is parsed as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DevctlError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DeviceInfoConfig = serde_json::from_str(json)
            .map_err(|e| DevctlError::ConfigError(format!("failed to parse config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse config from a YAML string. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: DeviceInfoConfig = serde_yaml::from_str(yaml)
            .map_err(|e| DevctlError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a pretty JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DevctlError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - every command template must have at least one token
    /// - `timeout_seconds`, when set, must be positive
    pub fn validate(&self) -> Result<()> {
        for (key, template) in [
            ("UUID", &self.uuid),
            ("Resolution", &self.resolution),
            ("Orientation", &self.orientation),
        ] {
            if template.is_empty() {
                return Err(DevctlError::ConfigError(format!(
                    "config validation failed: {} command is empty",
                    key
                )));
            }
        }

        if self.timeout_seconds == Some(0) {
            return Err(DevctlError::ConfigError(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured command timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
