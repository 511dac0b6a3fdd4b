//! Configuration for the campsite system.
//!
//! Settings come from three places, later ones winning: the YAML file at
//! `<data_dir>/config.yaml`, environment variables, and explicit overrides
//! supplied by the caller (typically CLI flags).

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::database::default_data_dir;
use crate::error::{Error, Result};

/// Complete configuration structure.
///
/// Every field is optional; absent fields fall back to built-in defaults
/// at the point of use.
///
/// # Examples
///
/// ```
/// use campsite::Config;
///
/// let config = Config {
///     maximum_lock_wait_seconds: Some(10),
///     ..Default::default()
/// };
/// assert_eq!(config.maximum_lock_wait_seconds, Some(10));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the database and configuration files.
    pub data_dir: Option<PathBuf>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

/// Builds a [`Config`] from files, the environment, and overrides.
///
/// # Examples
///
/// ```no_run
/// use campsite::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    overrides: Config,
}

impl ConfigBuilder {
    /// Creates a new builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the data directory.
    #[must_use]
    pub fn data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.overrides.data_dir = dir;
        self
    }

    /// Overrides the lock wait bound.
    #[must_use]
    pub const fn maximum_lock_wait_seconds(mut self, seconds: Option<u64>) -> Self {
        self.overrides.maximum_lock_wait_seconds = seconds;
        self
    }

    /// Overrides the auto-initialization switch.
    #[must_use]
    pub const fn disable_autoinit(mut self, disable: Option<bool>) -> Self {
        self.overrides.disable_autoinit = disable;
        self
    }

    /// Resolves the final configuration.
    ///
    /// Merge order, later winning: config file, environment variables
    /// (`CAMPSITE_DATA_DIR`, `CAMPSITE_BUSY_TIMEOUT`,
    /// `CAMPSITE_DISABLE_AUTOINIT`), explicit overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if an environment variable holds an unparseable value.
    pub fn build(self) -> Result<Config> {
        let data_dir = self
            .overrides
            .data_dir
            .clone()
            .or_else(|| env::var("CAMPSITE_DATA_DIR").ok().map(PathBuf::from))
            .or_else(|| default_data_dir().ok());

        let mut config = match &data_dir {
            Some(dir) => load_config_file(&dir.join("config.yaml"))?,
            None => Config::default(),
        };

        apply_environment(&mut config)?;
        merge(&mut config, self.overrides);
        config.data_dir = data_dir;

        Ok(config)
    }
}

/// Loads a configuration file, returning defaults if it does not exist.
fn load_config_file(path: &std::path::Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Applies environment variable overrides to a config.
fn apply_environment(config: &mut Config) -> Result<()> {
    if let Ok(value) = env::var("CAMPSITE_BUSY_TIMEOUT") {
        let seconds = value.parse::<u64>().map_err(|_| Error::Validation {
            field: "CAMPSITE_BUSY_TIMEOUT".into(),
            message: format!("expected a number of seconds, got '{value}'"),
        })?;
        config.maximum_lock_wait_seconds = Some(seconds);
    }

    if let Ok(value) = env::var("CAMPSITE_DISABLE_AUTOINIT") {
        config.disable_autoinit = Some(value == "1" || value.eq_ignore_ascii_case("true"));
    }

    Ok(())
}

/// Overlays `overrides` onto `config`, field by field.
fn merge(config: &mut Config, overrides: Config) {
    if overrides.data_dir.is_some() {
        config.data_dir = overrides.data_dir;
    }
    if overrides.maximum_lock_wait_seconds.is_some() {
        config.maximum_lock_wait_seconds = overrides.maximum_lock_wait_seconds;
    }
    if overrides.disable_autoinit.is_some() {
        config.disable_autoinit = overrides.disable_autoinit;
    }
}
