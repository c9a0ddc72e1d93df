//! Configuration loaded from `config.toml`.
//!
//! Every section is optional; missing keys fall back to the defaults in
//! `types.rs`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, CarouselConfig, Config, LoggingConfig, UiConfig};
