//! Synchronization tuning configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file,
//! then `ROUTEPLAY_*` environment variables. Each value remembers where
//! it came from so an operator can inspect the effective configuration.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use routeplay_core::error::{Result, RouteplayError};
use serde::{Deserialize, Serialize};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Playback synchronization tuning.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Minimum divergence in seconds before the video is asked to seek
    pub seek_dead_band: ConfigValue<f64>,

    /// Granularity in seconds used to round video time ticks
    pub tick_resolution: ConfigValue<f64>,

    /// How long video ticks are suppressed after an externally driven seek
    pub settle_window: ConfigValue<Duration>,
}

impl SyncConfig {
    /// Create a configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            seek_dead_band: ConfigValue::new(0.05, ConfigSource::Default),
            tick_resolution: ConfigValue::new(0.1, ConfigSource::Default),
            settle_window: ConfigValue::new(Duration::from_millis(100), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| RouteplayError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| RouteplayError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(dead_band) = file_config.seek_dead_band {
            self.seek_dead_band.update(dead_band, ConfigSource::File);
        }

        if let Some(resolution) = file_config.tick_resolution {
            self.tick_resolution.update(resolution, ConfigSource::File);
        }

        if let Some(ms) = file_config.settle_window_ms {
            self.settle_window
                .update(Duration::from_millis(ms), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(value) = env::var("ROUTEPLAY_SEEK_DEAD_BAND") {
            match value.parse::<f64>() {
                Ok(dead_band) => self
                    .seek_dead_band
                    .update(dead_band, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ROUTEPLAY_SEEK_DEAD_BAND value '{}': expected seconds",
                    value
                ),
            }
        }

        if let Ok(value) = env::var("ROUTEPLAY_TICK_RESOLUTION") {
            match value.parse::<f64>() {
                Ok(resolution) => self
                    .tick_resolution
                    .update(resolution, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ROUTEPLAY_TICK_RESOLUTION value '{}': expected seconds",
                    value
                ),
            }
        }

        if let Ok(value) = env::var("ROUTEPLAY_SETTLE_WINDOW_MS") {
            match value.parse::<u64>() {
                Ok(ms) => self
                    .settle_window
                    .update(Duration::from_millis(ms), ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ROUTEPLAY_SETTLE_WINDOW_MS value '{}': expected milliseconds",
                    value
                ),
            }
        }

        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    seek_dead_band: Option<f64>,
    tick_resolution: Option<f64>,
    settle_window_ms: Option<u64>,
}
