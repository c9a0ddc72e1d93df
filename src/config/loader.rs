use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
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
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/reviews-carousel/config.toml` on Linux, or the
    /// equivalent from `dirs::config_dir()` elsewhere. Falls back to the
    /// current directory if no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("reviews-carousel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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
    /// - The base URL is an absolute http(s) URL
    /// - The endpoint is an absolute path
    /// - Every duration and threshold is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        match Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(invalid(format!(
                    "Unsupported scheme '{}' in base_url '{}'",
                    url.scheme(),
                    base_url
                )));
            }
            Err(e) => {
                return Err(invalid(format!("Invalid base_url '{}': {}", base_url, e)));
            }
        }

        if !self.api.endpoint.starts_with('/') {
            return Err(invalid(format!(
                "Endpoint '{}' must start with '/'",
                self.api.endpoint
            )));
        }

        let carousel = &self.carousel;
        let positive = [
            ("carousel.transition_ms", carousel.transition_ms),
            ("carousel.auto_scroll_ms", carousel.auto_scroll_ms),
            ("carousel.resume_delay_ms", carousel.resume_delay_ms),
            ("carousel.swipe_threshold", u64::from(carousel.swipe_threshold)),
            ("carousel.drag_threshold", u64::from(carousel.drag_threshold)),
            ("ui.tick_rate_ms", self.ui.tick_rate_ms),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(invalid(format!("{} must be greater than zero", name)));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
