//! Configuration file handling.
//!
//! The configuration only names the external commands; every field has a
//! default so an empty JSON object is a valid file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// External command configuration, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandrConfig {
    /// Program printing the display report
    pub query_command: String,
    /// Arguments passed to `query_command`
    pub query_args: Vec<String>,
    /// Program applying a mode; receives `--output/--mode/--rate`
    pub apply_command: String,
}

impl Default for RandrConfig {
    fn default() -> Self {
        Self {
            query_command: "xrandr".to_string(),
            query_args: vec!["--query".to_string()],
            apply_command: "xrandr".to_string(),
        }
    }
}

impl RandrConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.query_command.trim().is_empty() {
            anyhow::bail!("query_command must be specified");
        }
        if self.apply_command.trim().is_empty() {
            anyhow::bail!("apply_command must be specified");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_xrandr() {
        let config = RandrConfig::default();
        assert_eq!(config.query_command, "xrandr");
        assert_eq!(config.query_args, vec!["--query"]);
        assert_eq!(config.apply_command, "xrandr");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_json_config() {
        let config = RandrConfig {
            query_command: "/usr/bin/xrandr".to_string(),
            query_args: vec!["-q".to_string()],
            apply_command: "/usr/bin/xrandr".to_string(),
        };
        let file = NamedTempFile::new().expect("Failed to create temp file");

        config.save_to_file(file.path()).expect("Failed to save");
        let loaded = RandrConfig::load_from_file(file.path()).expect("Failed to load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: RandrConfig =
            serde_json::from_str(r#"{ "apply_command": "true" }"#).expect("Should parse");
        assert_eq!(config.query_command, "xrandr");
        assert_eq!(config.apply_command, "true");
    }

    #[test]
    fn test_load_nonexistent_file() {
        assert!(RandrConfig::load_from_file("/nonexistent/randr-tui.json").is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        fs::write(file.path(), "{ not json").expect("Failed to write");
        assert!(RandrConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_validation_empty_commands() {
        let config = RandrConfig {
            query_command: "  ".to_string(),
            ..RandrConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RandrConfig {
            apply_command: String::new(),
            ..RandrConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
