use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the reviews come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend (e.g., "http://127.0.0.1:8000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the reviews endpoint, joined to `base_url`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Carousel timings and gesture thresholds.
///
/// Durations are in milliseconds, thresholds in carousel units
/// (one terminal column is eight units).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Length of a slide transition; navigation is locked meanwhile.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Interval between automatic advances.
    #[serde(default = "default_auto_scroll_ms")]
    pub auto_scroll_ms: u64,
    /// Pause kept after a gesture or button press before auto-scroll resumes.
    #[serde(default = "default_resume_delay_ms")]
    pub resume_delay_ms: u64,
    /// Minimum touch swipe distance.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u32,
    /// Minimum pointer drag distance.
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw and timer resolution in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file; defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_endpoint() -> String {
    "/api/reviews".to_string()
}

fn default_transition_ms() -> u64 {
    500
}

fn default_auto_scroll_ms() -> u64 {
    3000
}

fn default_resume_delay_ms() -> u64 {
    1000
}

fn default_swipe_threshold() -> u32 {
    50
}

fn default_drag_threshold() -> u32 {
    30
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CarouselConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn auto_scroll(&self) -> Duration {
        Duration::from_millis(self.auto_scroll_ms)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            auto_scroll_ms: default_auto_scroll_ms(),
            resume_delay_ms: default_resume_delay_ms(),
            swipe_threshold: default_swipe_threshold(),
            drag_threshold: default_drag_threshold(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}
