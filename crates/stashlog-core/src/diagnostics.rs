//! Side-channel capabilities for ERROR/FATAL records
//!
//! - [`ErrorReporter`] receives every admitted ERROR and FATAL line before it
//!   is written to the sink. Reporting is fire-and-forget: there is no result
//!   and nothing a reporter does can affect the log call.
//! - [`Terminator`] ends the process after a FATAL line. Embedders that must
//!   not exit can inject their own.

use std::io::{self, Write};

use crate::domain::Severity;

/// Target used by [`TracingReporter`] events.
pub const DIAGNOSTIC_TARGET: &str = "stashlog::diagnostic";

/// Receives formatted ERROR/FATAL lines.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, severity: Severity, line: &str);
}

/// Forwards lines as `tracing` error events. Without a subscriber installed
/// this does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, severity: Severity, line: &str) {
        tracing::error!(target: DIAGNOSTIC_TARGET, %severity, "{}", line);
    }
}

/// Writes lines to process standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn report(&self, _severity: Severity, line: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }
}

/// Drops every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn report(&self, _severity: Severity, _line: &str) {}
}

/// Ends the process after a FATAL record.
pub trait Terminator: Send + Sync {
    /// Called with exit status 1. Implementations other than
    /// [`ProcessExit`] may return, in which case the log call returns too.
    fn terminate(&self, code: i32);
}

/// Calls [`std::process::exit`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code)
    }
}
