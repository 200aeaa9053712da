use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::platform;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Empty means: fall back to $LASTFM_API_KEY.
    #[serde(default)]
    pub api_key: String,
}

/// User-configurable file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Favorites file. Defaults to `<data_dir>/favorites.txt`.
    #[serde(default = "default_favorites_file")]
    pub favorites_file: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            favorites_file: default_favorites_file(),
        }
    }
}

fn default_base_url() -> String {
    "https://ws.audioscrobbler.com/2.0/".to_string()
}

fn default_favorites_file() -> PathBuf {
    platform::data_dir().join("favorites.txt")
}

impl ApiConfig {
    /// The configured key, or $LASTFM_API_KEY when config.toml leaves it empty.
    pub fn resolved_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var("LASTFM_API_KEY").unwrap_or_default()
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api.base_url.starts_with("https://"));
        assert!(config.api.api_key.is_empty());
        assert!(config.paths.favorites_file.ends_with("favorites.txt"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[api]\napi_key = \"abc123\"\n").unwrap();
        assert_eq!(config.api.api_key, "abc123");
        assert_eq!(config.api.base_url, default_base_url());
        assert!(config.paths.favorites_file.ends_with("favorites.txt"));
    }
}
