use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Simple configuration for carton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Inputs longer than this many items render aggregated by default.
    #[serde(default = "default_aggregate_threshold")]
    pub aggregate_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            aggregate_threshold: default_aggregate_threshold(),
        }
    }
}

fn default_aggregate_threshold() -> usize {
    30
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "carton", "carton") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.carton/config.toml")
        }
    }
}
