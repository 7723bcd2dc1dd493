use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Timestamp rendering for the `[<timestamp>]` part of a line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// RFC 3339 with second precision, `Z` for UTC.
    #[default]
    Rfc3339,
    /// A chrono strftime pattern.
    Strftime(String),
}

impl TimeFormat {
    /// Render `timestamp`. A pattern chrono rejects falls back to RFC 3339.
    pub fn render<Tz>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if let Self::Strftime(pattern) = self {
            let mut out = String::new();
            if write!(out, "{}", timestamp.format(pattern)).is_ok() {
                return out;
            }
        }
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<&str> for TimeFormat {
    fn from(pattern: &str) -> Self {
        if pattern.eq_ignore_ascii_case("rfc3339") {
            Self::Rfc3339
        } else {
            Self::Strftime(pattern.to_string())
        }
    }
}
