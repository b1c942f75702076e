//! Configuration system for LoopForge.
//!
//! Describe a loop nest in a TOML or YAML file and build a validated
//! [`DynNest`] from it at runtime.
//!
//! # Examples
//!
//! Load a nest from a TOML string:
//!
//! ```
//! use loopforge_config::NestConfig;
//!
//! let config = NestConfig::from_toml_str(r#"
//!     [[levels]]
//!     type = "range"
//!     lower = 0
//!     upper = 3
//!
//!     [[levels]]
//!     type = "symm_lower"
//!     index = 0
//!     lower = 0
//!     offset = 1
//! "#).unwrap();
//!
//! let nest = config.build().unwrap();
//! assert_eq!(nest.count(), 6);
//! ```
//!
//! Or build the same nest in code:
//!
//! ```
//! use loopforge_config::{LevelConfig, NestConfig};
//!
//! let config = NestConfig::new()
//!     .with_level(LevelConfig::Range { lower: 0, upper: 3 })
//!     .with_level(LevelConfig::SymmLower { index: 0, lower: 0, offset: 1 });
//! assert_eq!(config.build().unwrap().count(), 6);
//! ```

use std::path::Path;

use loopforge_core::{Bound, BoundError, DynNest};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid loop nest: {0}")]
    Bounds(#[from] BoundError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A loop nest read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NestConfig {
    /// Levels, outermost first.
    #[serde(default)]
    pub levels: Vec<LevelConfig>,

    /// `EnvFilter` directive for binaries that log, e.g. `"loopforge=debug"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl NestConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") | None => Self::from_toml_file(path),
            Some(other) => Err(ConfigError::Invalid(format!(
                "unsupported config format `.{}` for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading nest config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading nest config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Appends a level.
    pub fn with_level(mut self, level: LevelConfig) -> Self {
        self.levels.push(level);
        self
    }

    /// Sets the log filter directive.
    pub fn with_log_filter(mut self, directive: impl Into<String>) -> Self {
        self.log_filter = Some(directive.into());
        self
    }

    /// Descriptors for the configured levels, unvalidated.
    pub fn bounds(&self) -> Vec<Bound> {
        self.levels.iter().copied().map(Bound::from).collect()
    }

    /// Validates the levels and builds the nest.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Bounds`] with the first guard that rejects
    /// the levels.
    pub fn build(&self) -> Result<DynNest, ConfigError> {
        let nest = DynNest::new(self.bounds())?;
        debug!(depth = nest.depth(), "built loop nest from config");
        Ok(nest)
    }
}

/// One loop level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LevelConfig {
    /// `lower <= i < upper`.
    Range { lower: usize, upper: usize },

    /// `i[index] <= i < upper`.
    SymmUpper { index: usize, upper: usize },

    /// `lower <= i < i[index] + offset`.
    SymmLower {
        index: usize,
        lower: usize,
        #[serde(default)]
        offset: isize,
    },
}

impl From<LevelConfig> for Bound {
    fn from(level: LevelConfig) -> Self {
        match level {
            LevelConfig::Range { lower, upper } => Bound::range(lower, upper),
            LevelConfig::SymmUpper { index, upper } => Bound::symm_upper(index, upper),
            LevelConfig::SymmLower {
                index,
                lower,
                offset,
            } => Bound::symm_lower_offset(index, lower, offset),
        }
    }
}

impl From<Bound> for LevelConfig {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Range { lower, upper } => LevelConfig::Range { lower, upper },
            Bound::SymmUpper { index, upper } => LevelConfig::SymmUpper { index, upper },
            Bound::SymmLower {
                index,
                lower,
                offset,
            } => LevelConfig::SymmLower {
                index,
                lower,
                offset,
            },
        }
    }
}
