use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable holding the bot token.
pub const TOKEN_ENV_VAR: &str = "BOT_TOKEN";

/// Errors that can occur when loading configuration.
///
/// All of them are fatal at startup; none occur while handling events.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("BOT_TOKEN is not set. Create a .env file or set bot.token in the config")]
    MissingToken,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/oynaiq/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("oynaiq").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - New matches have at least one place
    /// - The organizer does not take more places than exist
    /// - The interrupt keyword is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matches.capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "matches.capacity must be at least 1".to_string(),
            });
        }

        if self.matches.organizer_seats > self.matches.capacity {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "matches.organizer_seats ({}) exceeds matches.capacity ({})",
                    self.matches.organizer_seats, self.matches.capacity
                ),
            });
        }

        if self.bot.interrupt_keyword.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "bot.interrupt_keyword must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Bot token: the environment value wins over the config file.
    pub fn resolve_token(&self, env_token: Option<String>) -> Result<String, ConfigError> {
        env_token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.bot.token.clone().filter(|t| !t.trim().is_empty()))
            .ok_or(ConfigError::MissingToken)
    }
}
