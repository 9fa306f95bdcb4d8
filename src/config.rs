//! Logger configuration

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tag used when none is configured
pub const DEFAULT_TAG: &str = "EasyLog";

/// Settings fixed at startup and read by every log call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Tag attached to every line sent to the sink
    #[serde(default = "default_tag")]
    pub tag: String,

    /// When false, only Warn and above are emitted
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            enabled: default_enabled(),
        }
    }
}

impl LogConfig {
    pub fn new(tag: impl Into<String>, enabled: bool) -> Self {
        Self {
            tag: tag.into(),
            enabled,
        }
    }

    /// Enabled in debug builds, disabled in release builds
    pub fn for_build(tag: impl Into<String>) -> Self {
        Self::new(tag, cfg!(debug_assertions))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read log config {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse log config")
    }

    /// Load configuration from a TOML file, or return the default if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize log config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write log config {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.tag, "EasyLog");
        assert!(config.enabled);
    }

    #[test]
    fn test_for_build_follows_debug_assertions() {
        let config = LogConfig::for_build("SampleApp");
        assert_eq!(config.tag, "SampleApp");
        assert_eq!(config.enabled, cfg!(debug_assertions));
    }

    #[test]
    fn test_config_serialization() {
        let config = LogConfig::new("SampleApp", false);
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LogConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: LogConfig = toml::from_str("tag = \"Net\"").unwrap();
        assert_eq!(parsed.tag, "Net");
        assert!(parsed.enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("easylog.toml");

        let config = LogConfig::new("Persisted", false);
        config.save(&path).unwrap();

        assert_eq!(LogConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert_eq!(LogConfig::load_or_default(&path).unwrap(), LogConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "enabled = maybe").unwrap();

        let err = LogConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse log config"));
    }
}
