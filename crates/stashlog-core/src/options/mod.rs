//! Logger options
//!
//! [`Options`] is resolved once: start from the defaults and apply an
//! ordered list of [`LogOption`] mutators, each overriding one field. The
//! result has no setters and is owned by a single logger.
//!
//! | field | default |
//! |-------|---------|
//! | output | stdout |
//! | level | WARN |
//! | colorize | off |
//! | paint functions | [`default_paint_functions`] |
//! | time format | RFC 3339 |
//! | stash | none |
//! | error reporter | [`TracingReporter`] |
//! | terminator | [`ProcessExit`] |

pub mod paint;
mod time_format;

pub use paint::{default_paint_functions, PaintFn, PaintMap, RESET};
pub use time_format::TimeFormat;

use std::fmt;
use std::sync::Arc;

use crate::diagnostics::{ErrorReporter, ProcessExit, Terminator, TracingReporter};
use crate::domain::{LevelFilter, Severity};
use crate::sink::Sink;
use crate::stash::{LogSender, Stash, StashExecutor};

/// Default minimum severity.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// A configuration mutator. None of them can fail.
pub enum LogOption {
    /// Set the output stream.
    Output(Sink),
    /// Set the minimum severity.
    Level(LevelFilter),
    /// Enable or disable colorized output.
    Colorize(bool),
    /// Merge paint functions: only severities present in the map are
    /// replaced. `None` leaves the current mapping alone.
    PaintFunctions(Option<PaintMap>),
    /// Stash through `executor` into the default table.
    StashOutput(Arc<dyn StashExecutor>),
    /// Stash through `executor` into a named table.
    StashTable(Arc<dyn StashExecutor>, String),
    /// Stash through any sender.
    StashSender(Arc<dyn LogSender>),
    /// Timestamp format.
    TimeFormat(TimeFormat),
    /// Side-channel for ERROR/FATAL lines.
    ErrorReporter(Arc<dyn ErrorReporter>),
    /// What FATAL does after writing its line.
    Terminator(Arc<dyn Terminator>),
}

impl LogOption {
    pub fn output(sink: Sink) -> Self {
        Self::Output(sink)
    }

    /// Minimum severity; `Severity` or `LevelFilter` both work.
    pub fn level(level: impl Into<LevelFilter>) -> Self {
        Self::Level(level.into())
    }

    pub fn colorize(colorize: bool) -> Self {
        Self::Colorize(colorize)
    }

    pub fn paint_functions(functions: Option<PaintMap>) -> Self {
        Self::PaintFunctions(functions)
    }

    pub fn stash_output(executor: Arc<dyn StashExecutor>) -> Self {
        Self::StashOutput(executor)
    }

    pub fn time_format(format: impl Into<TimeFormat>) -> Self {
        Self::TimeFormat(format.into())
    }

    fn apply(self, o: &mut Options) {
        match self {
            Self::Output(sink) => o.output = sink,
            Self::Level(level) => o.level = level,
            Self::Colorize(colorize) => o.colorize = colorize,
            Self::PaintFunctions(None) => {}
            Self::PaintFunctions(Some(functions)) => o.paint_functions.extend(functions),
            Self::StashOutput(executor) => o.stash = Some(Arc::new(Stash::new(executor))),
            Self::StashTable(executor, table) => {
                o.stash = Some(Arc::new(Stash::with_table(executor, table)))
            }
            Self::StashSender(sender) => o.stash = Some(sender),
            Self::TimeFormat(format) => o.time_format = format,
            Self::ErrorReporter(reporter) => o.error_reporter = reporter,
            Self::Terminator(terminator) => o.terminator = terminator,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Output(_) => "output",
            Self::Level(_) => "level",
            Self::Colorize(_) => "colorize",
            Self::PaintFunctions(_) => "paint_functions",
            Self::StashOutput(_) => "stash_output",
            Self::StashTable(..) => "stash_table",
            Self::StashSender(_) => "stash_sender",
            Self::TimeFormat(_) => "time_format",
            Self::ErrorReporter(_) => "error_reporter",
            Self::Terminator(_) => "terminator",
        }
    }
}

impl fmt::Debug for LogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved logger configuration.
pub struct Options {
    output: Sink,
    level: LevelFilter,
    colorize: bool,
    paint_functions: PaintMap,
    time_format: TimeFormat,
    stash: Option<Arc<dyn LogSender>>,
    error_reporter: Arc<dyn ErrorReporter>,
    terminator: Arc<dyn Terminator>,
}

impl Options {
    /// Apply `mutators` in order over the defaults.
    pub fn new(mutators: impl IntoIterator<Item = LogOption>) -> Self {
        let mut options = Self::default();
        for mutator in mutators {
            mutator.apply(&mut options);
        }
        options
    }

    pub fn output(&self) -> &Sink {
        &self.output
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    pub fn paint_function(&self, severity: Severity) -> Option<&PaintFn> {
        self.paint_functions.get(&severity)
    }

    pub fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    pub fn stash(&self) -> Option<&dyn LogSender> {
        self.stash.as_deref()
    }

    pub fn error_reporter(&self) -> &dyn ErrorReporter {
        self.error_reporter.as_ref()
    }

    pub fn terminator(&self) -> &dyn Terminator {
        self.terminator.as_ref()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: Sink::stdout(),
            level: DEFAULT_LEVEL,
            colorize: false,
            paint_functions: default_paint_functions(),
            time_format: TimeFormat::Rfc3339,
            stash: None,
            error_reporter: Arc::new(TracingReporter),
            terminator: Arc::new(ProcessExit),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("output", &self.output)
            .field("level", &self.level)
            .field("colorize", &self.colorize)
            .field("time_format", &self.time_format)
            .field("stash", &self.stash.is_some())
            .finish_non_exhaustive()
    }
}
