use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing provider API key (set SKYCAST_API_KEY or api_key in config.toml)")]
    MissingApiKey,

    #[error("invalid provider base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid listen address: {0}")]
    InvalidListenAddr(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key. The environment variable `SKYCAST_API_KEY`
    /// takes precedence over the config file value.
    #[serde(default)]
    pub api_key: String,

    /// Base URL for the weather provider. Overridable so tests can point
    /// at a local mock server.
    #[serde(default = "default_base_url")]
    pub provider_base_url: String,

    /// Unit system passed through to the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// City used when a request doesn't name one
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Path of the favorites JSON file
    #[serde(default = "default_favorites_path")]
    pub favorites_path: PathBuf,

    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_city() -> String {
    "Patna".to_string()
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("favorite_cities.json")
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            provider_base_url: default_base_url(),
            units: default_units(),
            default_city: default_city(),
            favorites_path: default_favorites_path(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist.
    ///
    /// `SKYCAST_API_KEY` from the environment overrides the file value so
    /// the key never has to be committed to disk.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        if let Ok(key) = std::env::var("SKYCAST_API_KEY") {
            if !key.is_empty() {
                config.api_key = key;
            }
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        match Url::parse(&self.provider_base_url) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    return Err(ConfigError::InvalidBaseUrl(format!(
                        "URL must use http or https scheme, got: {}",
                        url.scheme()
                    )));
                }
                if url.host().is_none() {
                    return Err(ConfigError::InvalidBaseUrl(
                        "URL must have a host".to_string(),
                    ));
                }
            }
            Err(e) => {
                return Err(ConfigError::InvalidBaseUrl(e.to_string()));
            }
        }

        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidListenAddr(self.listen_addr.clone()));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}
