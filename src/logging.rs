//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log location: `<cache_dir>/reviews-carousel/reviews-carousel.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    cache_dir.join("reviews-carousel").join("reviews-carousel.log")
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_tracing(config: &LoggingConfig) -> std::io::Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(file))
        .init();

    Ok(path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
