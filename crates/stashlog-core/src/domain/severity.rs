//! Severity levels and the minimum-severity filter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered by rank.
///
/// `Fatal` has the lowest rank and `Info` the highest. A filter configured at
/// some severity admits that severity and every severity with a lower rank,
/// so one threshold covers all the more critical levels too.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    Debug = 3,
    Info = 4,
}

impl Severity {
    /// Every severity, in rank order.
    pub const ALL: [Severity; 5] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Debug,
        Self::Info,
    ];

    /// Numeric rank (FATAL = 0 ... INFO = 4).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
        }
    }

    /// Parse a severity name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fatal" => Some(Self::Fatal),
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Whether this severity goes through the ERROR/FATAL side-channel.
    pub fn is_error(self) -> bool {
        matches!(self, Self::Fatal | Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity or filter name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0:?}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

/// Minimum-severity threshold.
///
/// `Off` is stricter than any severity and admits nothing, not even FATAL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilter {
    Off,
    Fatal,
    Error,
    #[default]
    Warn,
    Debug,
    Info,
}

impl LevelFilter {
    /// The threshold severity, or `None` for `Off`.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Fatal => Some(Severity::Fatal),
            Self::Error => Some(Severity::Error),
            Self::Warn => Some(Severity::Warn),
            Self::Debug => Some(Severity::Debug),
            Self::Info => Some(Severity::Info),
        }
    }

    /// True when a record at `severity` passes this filter.
    pub fn admits(self, severity: Severity) -> bool {
        self.severity()
            .is_some_and(|threshold| severity.rank() <= threshold.rank())
    }

    pub fn as_str(&self) -> &'static str {
        self.severity().map_or("OFF", |s| s.as_str())
    }
}

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Fatal => Self::Fatal,
            Severity::Error => Self::Error,
            Severity::Warn => Self::Warn,
            Severity::Debug => Self::Debug,
            Severity::Info => Self::Info,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("off") {
            return Ok(Self::Off);
        }
        s.parse::<Severity>().map(Self::from)
    }
}
