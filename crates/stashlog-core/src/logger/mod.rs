//! Logger: level-gated dispatch to the output sink and the stash
//!
//! Every emit goes through the same pipeline:
//!
//! 1. drop the record if the configured level does not admit it;
//! 2. build `[<timestamp>][<SEVERITY>] <message>`;
//! 3. ERROR and FATAL hand the line to the error reporter;
//! 4. write the line, painted and followed by a color reset when colorize
//!    is on, then a newline;
//! 5. FATAL flushes the sink and calls the terminator with status 1.
//!
//! Stash calls bypass the level filter and never report failures.

mod writer;

pub use writer::LogWriter;

use std::fmt::{self, Display};
use std::io::Write;

use tracing::debug;

use crate::domain::{LogRecord, Severity};
use crate::options::{LogOption, Options, RESET};

/// Exit status used after a FATAL record.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Leveled logger over one resolved [`Options`].
#[derive(Debug)]
pub struct Logger {
    opts: Options,
}

impl Logger {
    /// Build a logger from the defaults plus `options`, applied in order.
    pub fn new(options: impl IntoIterator<Item = LogOption>) -> Self {
        Self::from_options(Options::new(options))
    }

    pub fn from_options(opts: Options) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Whether a record at `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.opts.level().admits(severity)
    }

    /// Emit a formatted record at `severity`.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }

        let record = LogRecord::now(severity, args);
        let line = record.line(self.opts.time_format());

        if severity.is_error() {
            self.opts.error_reporter().report(severity, &line);
        }

        self.write_line(severity, &line);

        if severity == Severity::Fatal {
            let _ = self.opts.output().flush();
            self.opts.terminator().terminate(FATAL_EXIT_CODE);
        }
    }

    fn write_line(&self, severity: Severity, line: &str) {
        let paint = self
            .opts
            .paint_function(severity)
            .filter(|_| self.opts.colorize());

        // Rendered before the sink is locked, so paint functions may log.
        let mut buf = Vec::with_capacity(line.len() + 16);
        let _ = match paint {
            Some(paint) => paint(&mut buf, format_args!("{line}"))
                .and_then(|()| buf.write_all(RESET.as_bytes())),
            None => buf.write_all(line.as_bytes()),
        };
        buf.push(b'\n');

        // Sink write errors have nowhere to go.
        let _ = self.opts.output().lock().write_all(&buf);
    }

    pub fn error(&self, value: impl Display) {
        self.errorf(format_args!("{value}"))
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args)
    }

    pub fn debug(&self, value: impl Display) {
        self.debugf(format_args!("{value}"))
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args)
    }

    /// Write a FATAL record, then terminate the process with status 1.
    ///
    /// Returns only when the record is filtered out or a non-exiting
    /// terminator was configured.
    pub fn fatal(&self, value: impl Display) {
        self.fatalf(format_args!("{value}"))
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args)
    }

    pub fn info(&self, value: impl Display) {
        self.infof(format_args!("{value}"))
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args)
    }

    pub fn warn(&self, value: impl Display) {
        self.warnf(format_args!("{value}"))
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args)
    }

    /// Forward `value` to the stash under `request_id`.
    ///
    /// Fire-and-forget: a missing stash makes this a no-op and delivery
    /// failures are dropped after a `debug` trace.
    pub fn stash(&self, request_id: &str, value: impl Display) {
        self.stashf(request_id, format_args!("{value}"))
    }

    pub fn stashf(&self, request_id: &str, args: fmt::Arguments<'_>) {
        let Some(stash) = self.opts.stash() else {
            return;
        };

        let message = args.to_string();
        if let Err(e) = stash.send(request_id, &message) {
            debug!(request_id, error = %e, "dropping stashed log entry");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_options(Options::default())
    }
}
