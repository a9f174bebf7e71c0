//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`. Focus and break lengths
//! are not part of the file; they come from command-line flags each run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomoError;
use crate::timer::alert::DEFAULT_SOUND;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Alert settings.
    pub sound: SoundConfig,
    /// Tick settings.
    pub tick: TickConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// Alert settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SoundConfig {
    /// Play an alert when a session runs out.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// External player, e.g. `["paplay"]`. The terminal bell is used when unset.
    #[serde(default)]
    pub command: Option<Vec<String>>,
    /// Sound resource passed to the external player.
    #[serde(default = "default_resource")]
    pub resource: String,
}

/// Tick settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TickConfig {
    /// Length of one tick in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Defaults to `~/.pomo/pomo.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

// Default value functions for serde
const fn default_true() -> bool {
    true
}

fn default_resource() -> String {
    DEFAULT_SOUND.to_string()
}

const fn default_interval_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            command: None,
            resource: default_resource(),
        }
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl TickConfig {
    /// Tick length as a `Duration`.
    #[must_use]
    pub const fn period(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Config {
    /// Load configuration from `path`, or from the default path when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or if
    /// a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, PomoError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_from_path(&Paths::new()?.config_file),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or if
    /// a value is out of range.
    pub fn load_from_path(path: &Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<(), PomoError> {
        if self.tick.interval_ms == 0 {
            return Err(PomoError::Config(
                "tick.interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.sound.command.as_ref().is_some_and(Vec::is_empty) {
            return Err(PomoError::Config(
                "sound.command must name a program".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, PomoError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.sound.enabled);
        assert_eq!(config.sound.command, None);
        assert_eq!(config.sound.resource, DEFAULT_SOUND);
        assert_eq!(config.tick.period(), Duration::from_secs(1));
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r#"
sound:
  command: ["paplay", "--volume=30000"]
tick:
  interval_ms: 250
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load(Some(config_path.as_path())).unwrap();

        assert_eq!(
            config.sound.command,
            Some(vec!["paplay".to_string(), "--volume=30000".to_string()])
        );
        assert_eq!(config.tick.period(), Duration::from_millis(250));
        // Defaults should be used for missing fields
        assert!(config.sound.enabled);
        assert_eq!(config.sound.resource, DEFAULT_SOUND);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "sound: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PomoError::Config(_)));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "tick:\n  interval_ms: 0\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("tick.interval_ms"));
    }

    #[test]
    fn test_empty_command_rejected() {
        let config = Config {
            sound: SoundConfig {
                command: Some(Vec::new()),
                ..SoundConfig::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip_keeps_values() {
        let mut config = Config::default();
        config.log.level = "debug".to_string();

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("level: debug"));
        assert_eq!(serde_yaml::from_str::<Config>(&yaml).unwrap(), config);
    }
}
