//! # Stashlog Core
//!
//! Leveled logging façade: formats `[<timestamp>][<SEVERITY>] <message>`
//! lines, filters them by a minimum severity, optionally colorizes them, and
//! can forward entries to a persistent stash keyed by request id.
//!
//! ## Modules
//!
//! - `domain` - Severities, level filters and the ephemeral log record
//! - `options` - Defaults, mutators and paint functions
//! - `sink` - Shared output stream
//! - `diagnostics` - ERROR/FATAL side-channel and process termination
//! - `stash` - Stash sender contract and the SQL-backed stash
//! - `logger` - Emission pipeline and the `LogWriter` trait
//! - `global` - Process-wide logger and forwarding functions
//! - `config` - Serializable configuration document
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stashlog_core::{global, LogOption, Severity};
//!
//! global::init([LogOption::level(Severity::Info), LogOption::colorize(true)]);
//! stashlog_core::info!("user {} logged in", "alice");
//! ```

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod global;
pub mod logger;
mod macros;
pub mod options;
pub mod sink;
pub mod stash;

// Re-export commonly used types
pub use config::{ConfigError, LoggerConfig, OutputTarget};
pub use diagnostics::{
    ErrorReporter, NoopReporter, ProcessExit, StderrReporter, Terminator, TracingReporter,
};
pub use domain::{new_request_id, LevelFilter, ParseSeverityError, Severity};
pub use logger::{LogWriter, Logger, FATAL_EXIT_CODE};
pub use options::{LogOption, Options, PaintFn, PaintMap, TimeFormat};
pub use sink::Sink;
pub use stash::{
    quote_table, LogSender, PersistenceError, Stash, StashError, StashExecutor,
    StatementOutcome, DEFAULT_STASH_TABLE,
};
