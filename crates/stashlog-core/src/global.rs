//! Process-wide logger
//!
//! [`init`] installs the singleton once; later calls keep the first
//! configuration. The free functions below forward to it; calling them
//! before [`init`] prints a message to standard error and aborts the whole
//! process, from whichever thread made the call.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::sync::OnceLock;

use crate::logger::Logger;
use crate::options::LogOption;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Printed before aborting on access to a missing logger.
pub const UNINITIALIZED_MESSAGE: &str = "stashlog: logger instance wasn't initialized";

/// Install the process-wide logger.
///
/// Returns `true` if this call created it, `false` if a logger already
/// existed; in that case `options` are dropped unused.
pub fn init(options: impl IntoIterator<Item = LogOption>) -> bool {
    let mut installed = false;
    LOGGER.get_or_init(|| {
        installed = true;
        Logger::new(options)
    });
    installed
}

/// The process-wide logger, if installed.
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get()
}

/// The process-wide logger.
///
/// Aborts the process if [`init`] has not been called.
pub fn assert_initialized() -> &'static Logger {
    match LOGGER.get() {
        Some(logger) => logger,
        None => abort_uninitialized(),
    }
}

#[cold]
fn abort_uninitialized() -> ! {
    let _ = writeln!(io::stderr().lock(), "{}", UNINITIALIZED_MESSAGE);
    std::process::abort()
}

pub fn error(value: impl Display) {
    assert_initialized().error(value)
}

pub fn errorf(args: fmt::Arguments<'_>) {
    assert_initialized().errorf(args)
}

pub fn debug(value: impl Display) {
    assert_initialized().debug(value)
}

pub fn debugf(args: fmt::Arguments<'_>) {
    assert_initialized().debugf(args)
}

pub fn fatal(value: impl Display) {
    assert_initialized().fatal(value)
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    assert_initialized().fatalf(args)
}

pub fn info(value: impl Display) {
    assert_initialized().info(value)
}

pub fn infof(args: fmt::Arguments<'_>) {
    assert_initialized().infof(args)
}

pub fn warn(value: impl Display) {
    assert_initialized().warn(value)
}

pub fn warnf(args: fmt::Arguments<'_>) {
    assert_initialized().warnf(args)
}

pub fn stash(request_id: &str, value: impl Display) {
    assert_initialized().stash(request_id, value)
}

pub fn stashf(request_id: &str, args: fmt::Arguments<'_>) {
    assert_initialized().stashf(request_id, args)
}
