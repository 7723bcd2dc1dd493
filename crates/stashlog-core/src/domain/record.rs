//! Ephemeral log record built for the duration of one emit call

use chrono::{DateTime, Local};
use std::fmt;

use super::Severity;
use crate::options::TimeFormat;

/// A single log record.
///
/// Lives only while the emit call runs; it is never stored.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub timestamp: DateTime<Local>,
    pub args: fmt::Arguments<'a>,
}

impl<'a> LogRecord<'a> {
    /// Capture a record stamped with the current local time.
    pub fn now(severity: Severity, args: fmt::Arguments<'a>) -> Self {
        Self {
            severity,
            timestamp: Local::now(),
            args,
        }
    }

    /// Render as `[<timestamp>][<SEVERITY>] <message>` without a newline.
    pub fn line(&self, time_format: &TimeFormat) -> String {
        format!(
            "[{}][{}] {}",
            time_format.render(&self.timestamp),
            self.severity,
            self.args
        )
    }
}

/// Generate a fresh request identifier for stash correlation.
pub fn new_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
