//! Serializable logger configuration
//!
//! A small document for applications that load their logging setup from a
//! file; it resolves into the same [`LogOption`] list code would build by
//! hand. Paint functions and reporters are code-only and not part of it.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::LevelFilter;
use crate::options::{LogOption, TimeFormat};
use crate::sink::Sink;
use crate::stash::{StashExecutor, DEFAULT_STASH_TABLE};

/// Standard stream selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

impl OutputTarget {
    pub fn sink(self) -> Sink {
        match self {
            Self::Stdout => Sink::stdout(),
            Self::Stderr => Sink::stderr(),
        }
    }
}

/// Error loading a [`LoggerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid logger config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    pub colorize: bool,
    /// `"rfc3339"` or a strftime pattern.
    pub time_format: String,
    pub output: OutputTarget,
    pub stash_table: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::default(),
            colorize: false,
            time_format: "rfc3339".to_string(),
            output: OutputTarget::default(),
            stash_table: DEFAULT_STASH_TABLE.to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Options for everything but the stash.
    pub fn to_options(&self) -> Vec<LogOption> {
        vec![
            LogOption::output(self.output.sink()),
            LogOption::level(self.level),
            LogOption::colorize(self.colorize),
            LogOption::time_format(TimeFormat::from(self.time_format.as_str())),
        ]
    }

    /// Options plus a stash on `stash_table` through `executor`.
    pub fn to_options_with_stash(&self, executor: Arc<dyn StashExecutor>) -> Vec<LogOption> {
        let mut options = self.to_options();
        options.push(LogOption::StashTable(executor, self.stash_table.clone()));
        options
    }
}
