//! Shared output sink

use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// A writable stream shared by every clone of the sink.
///
/// Each emitted line takes the lock once, so the paint call, the reset
/// escape and the trailing newline of one line never interleave with
/// another thread's output.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
    name: &'static str,
}

impl Sink {
    /// Wrap an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named(writer, "custom")
    }

    fn named<W: Write + Send + 'static>(writer: W, name: &'static str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
            name,
        }
    }

    /// Process standard output.
    pub fn stdout() -> Self {
        Self::named(io::stdout(), "stdout")
    }

    /// Process standard error.
    pub fn stderr() -> Self {
        Self::named(io::stderr(), "stderr")
    }

    /// Lock the underlying writer for the duration of one line.
    pub fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.inner.lock()
    }

    pub fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}
