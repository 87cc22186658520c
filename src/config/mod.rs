//! Configuration module for photoview
//!
//! Manages application configuration: where the source collections live,
//! default verbosity and the log level.
//! Configuration is stored in the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Verbosity of the log file
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching `log` level filter
    #[must_use]
    pub const fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ConfigError::Message(format!(
                "Invalid log level '{s}'. Use one of: off, error, warn, info, debug, trace"
            ))),
        }
    }
}

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["data_dir", "quiet", "log_level"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PhotoviewConfig {
    /// Directory holding `users.json`, `albums.json` and `photos.json`;
    /// the builtin collections are used when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Log file verbosity
    #[serde(default)]
    pub log_level: LogLevel,
}

impl PhotoviewConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("photoview").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the default configuration without writing it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration, falling back to defaults when it is unusable
    ///
    /// A malformed file or an unknown config directory is reported on stderr
    /// instead of aborting, so every command still runs and `config set` can
    /// overwrite the broken file.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => Self::fallback(&e),
        }
    }

    /// Load configuration from `path`, falling back to defaults on error
    #[must_use]
    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| Self::fallback(&e))
    }

    fn fallback(error: &ConfigError) -> Self {
        eprintln!("warning: ignoring configuration ({error}), using defaults");
        log::warn!("ignoring configuration: {error}");
        Self::default()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read a setting as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "data_dir" => Ok(self
                .data_dir
                .as_ref()
                .map_or_else(|| "(builtin)".to_string(), |dir| dir.display().to_string())),
            "quiet" => Ok(self.quiet.to_string()),
            "log_level" => Ok(self.log_level.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a setting from its text form
    ///
    /// An empty `data_dir` value resets it to the builtin collections.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or an unparsable value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "data_dir" => {
                self.data_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "log_level" => self.log_level = value.parse()?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PhotoviewConfig::default();
        assert!(config.data_dir.is_none());
        assert!(!config.quiet);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = TempDir::new().unwrap();
        let config = PhotoviewConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, PhotoviewConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = PhotoviewConfig {
            data_dir: Some(PathBuf::from("/srv/photos")),
            quiet: true,
            log_level: LogLevel::Debug,
        };
        config.save_to(&path).unwrap();

        let loaded = PhotoviewConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = PhotoviewConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert!(loaded.data_dir.is_none());
        assert_eq!(loaded.log_level, LogLevel::Info);
    }

    #[test]
    fn test_broken_file_falls_back_and_is_repaired() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\nlog_level = \"loud\"\n").unwrap();

        assert!(PhotoviewConfig::load_from(&path).is_err());
        let mut config = PhotoviewConfig::load_from_or_default(&path);
        assert_eq!(config, PhotoviewConfig::default());

        config.set("log_level", "debug").unwrap();
        config.save_to(&path).unwrap();

        let repaired = PhotoviewConfig::load_from(&path).unwrap();
        assert_eq!(repaired.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_unparsable_toml_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = [\n").unwrap();

        assert_eq!(PhotoviewConfig::load_from_or_default(&path), PhotoviewConfig::default());
    }

    #[test]
    fn test_set_and_get() {
        let mut config = PhotoviewConfig::default();

        config.set("quiet", "true").unwrap();
        config.set("log_level", "WARN").unwrap();
        config.set("data_dir", "/tmp/data").unwrap();

        assert_eq!(config.get("quiet").unwrap(), "true");
        assert_eq!(config.get("log_level").unwrap(), "warn");
        assert_eq!(config.get("data_dir").unwrap(), "/tmp/data");

        config.set("data_dir", "").unwrap();
        assert_eq!(config.get("data_dir").unwrap(), "(builtin)");
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = PhotoviewConfig::default();
        assert!(config.set("quiet", "maybe").is_err());
        assert!(config.set("log_level", "loud").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Off.to_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Trace.to_filter(), log::LevelFilter::Trace);
    }
}
