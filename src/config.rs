//! Engine configuration, loadable from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Longest allowed thinking delay.
const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Environment variable naming a config file.
pub const CONFIG_PATH_ENV: &str = "NOUGHTS_CONFIG";

/// Settings for a game run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pause before the computer replies, in milliseconds.
    thinking_delay_ms: u64,

    /// Seed for the computer's random fallback. Unset means a fresh seed
    /// from the OS on every run.
    seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 500,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(thinking_delay_ms: u64, seed: Option<u64>) -> Self {
        Self {
            thinking_delay_ms,
            seed,
        }
    }

    /// The thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Returns a copy with the thinking delay replaced.
    pub fn with_thinking_delay_ms(mut self, thinking_delay_ms: u64) -> Self {
        self.thinking_delay_ms = thinking_delay_ms;
        self
    }

    /// Returns a copy with the seed replaced.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(delay_ms = config.thinking_delay_ms, seed = ?config.seed, "Config loaded");
        Ok(config)
    }

    /// Loads configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds the run configuration from the places it can come from.
    ///
    /// The file is `explicit` if given, else `env_path`; either must exist.
    /// Without both, `default_path` is read if present and defaults are used
    /// otherwise. `delay_ms` and `seed` then replace the file's values and
    /// the result is validated.
    #[instrument(skip(default_path), fields(default_path = %default_path.as_ref().display()))]
    pub fn resolve(
        explicit: Option<PathBuf>,
        env_path: Option<PathBuf>,
        default_path: impl AsRef<Path>,
        delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = match explicit.or(env_path) {
            Some(path) => Self::from_file(&path).map_err(|e| {
                ConfigError::new(format!("{} ({})", e.message, path.display()))
            })?,
            None => Self::load_or_default(default_path)?,
        };

        let config = match delay_ms {
            Some(ms) => config.with_thinking_delay_ms(ms),
            None => config,
        };
        let config = match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        };
        config.validate()?;
        debug!(?config, "Config resolved");
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thinking_delay_ms == 0 {
            return Err(ConfigError::new(
                "thinking_delay_ms must be > 0".to_string(),
            ));
        }
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ConfigError::new(format!(
                "thinking_delay_ms must be <= {}",
                MAX_THINKING_DELAY_MS
            )));
        }
        Ok(())
    }

    /// Renders the defaults as TOML, for writing a starter config file.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
