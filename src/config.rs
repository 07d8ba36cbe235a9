//! Board configuration.
//!
//! Every setting has a default, so an absent file or an empty TOML document
//! yields a working board. Files only need to name the values they change:
//!
//! ```toml
//! [intake]
//! description_min_length = 10
//!
//! [display]
//! days_per_month = 22
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the configuration file used by the binary.
pub const CONFIG_PATH_ENV: &str = "TASKBOARD_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {reason}")]
    Read {
        /// Path of the file.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The document is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// A value is syntactically valid but unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Limits applied to the new-item form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeConfig {
    /// Minimum description length, in characters.
    pub description_min_length: usize,
    /// Smallest accepted effort, in person-days.
    pub effort_min: u32,
    /// Largest accepted effort, in person-days.
    pub effort_max: u32,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            effort_min: 1,
            effort_max: 1000,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Person-days per person-month; efforts of at least this many days are
    /// shown in months.
    pub days_per_month: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { days_per_month: 20 }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

/// Complete board configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Form limits.
    pub intake: IntakeConfig,
    /// Presentation settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl BoardConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::Invalid`] for unusable values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`BoardConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let raw = fs::read_to_string(file).map_err(|err| ConfigError::Read {
            path: file.display().to_string(),
            reason: err.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`BoardConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `days_per_month` is zero or the
    /// effort range is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.days_per_month == 0 {
            return Err(ConfigError::Invalid(
                "display.days_per_month must be positive".to_owned(),
            ));
        }
        if self.intake.effort_min > self.intake.effort_max {
            return Err(ConfigError::Invalid(format!(
                "intake.effort_min ({}) exceeds intake.effort_max ({})",
                self.intake.effort_min, self.intake.effort_max
            )));
        }
        Ok(())
    }
}
