use std::fmt::{self, Display};

use super::Logger;

/// The logging surface handed to code that should not care which logger,
/// or which implementation, it writes to.
///
/// Object safe: hold it as `&dyn LogWriter` or `Arc<dyn LogWriter>`.
pub trait LogWriter: Send + Sync {
    fn error(&self, value: &dyn Display);
    fn errorf(&self, args: fmt::Arguments<'_>);

    fn debug(&self, value: &dyn Display);
    fn debugf(&self, args: fmt::Arguments<'_>);

    /// Emit FATAL and terminate.
    fn fatal(&self, value: &dyn Display);
    fn fatalf(&self, args: fmt::Arguments<'_>);

    fn info(&self, value: &dyn Display);
    fn infof(&self, args: fmt::Arguments<'_>);

    fn warn(&self, value: &dyn Display);
    fn warnf(&self, args: fmt::Arguments<'_>);

    fn stash(&self, request_id: &str, value: &dyn Display);
    fn stashf(&self, request_id: &str, args: fmt::Arguments<'_>);
}

impl LogWriter for Logger {
    fn error(&self, value: &dyn Display) {
        Logger::error(self, value)
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        Logger::errorf(self, args)
    }

    fn debug(&self, value: &dyn Display) {
        Logger::debug(self, value)
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        Logger::debugf(self, args)
    }

    fn fatal(&self, value: &dyn Display) {
        Logger::fatal(self, value)
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        Logger::fatalf(self, args)
    }

    fn info(&self, value: &dyn Display) {
        Logger::info(self, value)
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        Logger::infof(self, args)
    }

    fn warn(&self, value: &dyn Display) {
        Logger::warn(self, value)
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        Logger::warnf(self, args)
    }

    fn stash(&self, request_id: &str, value: &dyn Display) {
        Logger::stash(self, request_id, value)
    }

    fn stashf(&self, request_id: &str, args: fmt::Arguments<'_>) {
        Logger::stashf(self, request_id, args)
    }
}
