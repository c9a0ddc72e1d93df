use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Ratings & Reviews carousel for the terminal.
#[derive(Debug, Parser)]
#[command(name = "reviews-carousel", version, about)]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL (e.g. http://127.0.0.1:8000)
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
