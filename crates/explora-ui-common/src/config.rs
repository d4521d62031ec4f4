//! Unified configuration for exploration front-ends.
//!
//! The [`ExploraConfig`] is stored in `~/.explora/config.toml`. Every section
//! is optional: unspecified values fall back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploraConfig {
    /// Where pages are read from.
    pub backend: BackendConfig,

    /// Page cache behaviour.
    pub cache: CacheConfig,

    /// Screen composition.
    pub runtime: RuntimeConfig,
}

/// Hosted database connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL. Unset means no remote backend.
    pub url: Option<String>,

    /// Public API key sent with every read.
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Page cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Age after which cached pages are fetched again.
    pub stale_after_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_after_secs: 300,
        }
    }
}

impl CacheConfig {
    /// Staleness window as a [`Duration`].
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }
}

/// Screen composition settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Explorations that show a floating action button.
    pub floating_actions: Vec<FloatingActionRule>,
}

/// One entry of the floating action allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingActionRule {
    /// Exploration id or slug the button belongs to.
    pub exploration: String,

    /// Button label.
    pub label: String,

    /// Link target.
    pub href: String,
}

impl ExploraConfig {
    /// Get the default config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".explora"))
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ExploraConfig::default();
        assert!(config.backend.url.is_none());
        assert_eq!(config.backend.timeout(), Duration::from_secs(10));
        assert_eq!(config.cache.stale_after(), Duration::from_secs(300));
        assert!(config.runtime.floating_actions.is_empty());
    }

    #[test]
    fn test_partial_config_parsing() {
        let toml = r#"
            [backend]
            url = "https://db.example.org"

            [[runtime.floating_actions]]
            exploration = "balade-marine"
            label = "Signaler une observation"
            href = "/observations/nouvelle"
        "#;

        let config: ExploraConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.backend.url.as_deref(), Some("https://db.example.org"));
        assert_eq!(config.runtime.floating_actions.len(), 1);

        // Defaults for unset values
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.cache.stale_after_secs, 300);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ExploraConfig::default();
        config.cache.stale_after_secs = 60;
        config.backend.api_key = Some("anon".to_string());
        config.save_to(&path).unwrap();

        let loaded = ExploraConfig::load_from(&path).unwrap();
        assert_eq!(loaded.cache.stale_after_secs, 60);
        assert_eq!(loaded.backend.api_key.as_deref(), Some("anon"));
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[cache]\nstale_after_secs = \"soon\"").unwrap();

        let err = ExploraConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
