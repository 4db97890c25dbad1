//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `patternhub.toml` in the working directory unless another path
//! is given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::Path;

use patternhub_domain::chat::JoinNoticePolicy;
use serde::Deserialize;

/// Slots the command demo binds; a smaller remote cannot run it.
pub const DEMO_SLOTS: usize = 3;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Remote control settings.
    pub remote: RemoteConfig,
    /// Chat room settings.
    pub chat: ChatConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Remote control configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Number of slots on each demo remote.
    pub slots: usize,
}

/// Chat room configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Who is told when someone joins.
    pub join_notice: JoinNoticePolicy,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is
    /// malformed, or if the resulting configuration is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `lookup`, normally the process
    /// environment. Values that do not parse are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("PATTERNHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("PATTERNHUB_SLOTS")
            && let Ok(slots) = val.trim().parse()
        {
            self.remote.slots = slots;
        }
        if let Some(val) = lookup("PATTERNHUB_JOIN_NOTICE")
            && let Ok(policy) = val.parse()
        {
            self.chat.join_notice = policy;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.remote.slots < DEMO_SLOTS {
            return Err(ConfigError::Validation(format!(
                "remote needs at least {DEMO_SLOTS} slots, got {}",
                self.remote.slots
            )));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "patternhub=warn".to_string(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self { slots: DEMO_SLOTS }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
