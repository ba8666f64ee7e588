//! Runtime configuration.
//!
//! Values come from `TOKSEQ_*` environment variables; unset variables fall
//! back to defaults.

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::split::SplitConvention;
use serde::{Deserialize, Serialize};
use std::env::VarError;

/// Environment variable selecting the split convention.
pub const CONVENTION_ENV: &str = "TOKSEQ_CONVENTION";

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "TOKSEQ_FORMAT";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TOKSEQ_LOG";

/// Configuration for splitting and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Convention applied when splitting text.
    pub convention: SplitConvention,

    /// Format used when rendering sequences.
    pub format: OutputFormat,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the split convention.
    #[must_use]
    pub const fn convention(mut self, convention: SplitConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if `TOKSEQ_CONVENTION` names an
    /// unknown convention or either variable is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Loads configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the convention value is unknown
    /// or a value is not valid Unicode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let mut config = Self::default();

        if let Some(value) = read_var(&lookup, CONVENTION_ENV)? {
            config.convention = value.parse()?;
        }
        if let Some(value) = read_var(&lookup, FORMAT_ENV)? {
            config.format = OutputFormat::parse(&value);
        }

        tracing::debug!(
            convention = %config.convention,
            format = %config.format,
            "loaded configuration"
        );
        Ok(config)
    }
}

/// Reads one variable; unset is `None`, non-Unicode is an error.
fn read_var<F>(lookup: &F, key: &str) -> Result<Option<String>>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(Error::Config {
            message: format!("{key} is not valid Unicode: {raw:?}"),
        }),
    }
}
