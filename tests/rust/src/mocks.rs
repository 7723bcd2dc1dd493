//! Mock capability implementations for testing
//!
//! In-memory sinks, executors, senders, reporters and terminators that
//! record what the logger did with them.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use stashlog_core::{
    ErrorReporter, LogSender, PersistenceError, Severity, StashError, StashExecutor,
    StatementOutcome, Terminator,
};

// ============================================================================
// SharedBuffer
// ============================================================================

/// Cloneable in-memory writer; every clone appends to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// ============================================================================
// Executors
// ============================================================================

/// A statement seen by a [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedStatement {
    pub statement: String,
    pub params: Vec<String>,
}

/// Records every statement and reports one affected row.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<ExecutedStatement>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ExecutedStatement> {
        self.calls.lock().clone()
    }
}

impl StashExecutor for RecordingExecutor {
    fn execute(
        &self,
        statement: &str,
        params: &[&str],
    ) -> Result<StatementOutcome, PersistenceError> {
        self.calls.lock().push(ExecutedStatement {
            statement: statement.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        });
        Ok(StatementOutcome::rows(1))
    }
}

/// Fails every call and counts attempts.
#[derive(Default)]
pub struct FailingExecutor {
    attempts: AtomicUsize,
}

impl FailingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl StashExecutor for FailingExecutor {
    fn execute(&self, _: &str, _: &[&str]) -> Result<StatementOutcome, PersistenceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(PersistenceError::msg("database is locked"))
    }
}

// ============================================================================
// RecordingSender
// ============================================================================

/// Records `(request_id, log)` pairs.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }
}

impl LogSender for RecordingSender {
    fn send(&self, request_id: &str, log: &str) -> Result<(), StashError> {
        self.sent
            .lock()
            .push((request_id.to_string(), log.to_string()));
        Ok(())
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Records side-channel reports.
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(Severity, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(Severity, String)> {
        self.reports.lock().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, severity: Severity, line: &str) {
        self.reports.lock().push((severity, line.to_string()));
    }
}

/// Records exit codes instead of exiting.
#[derive(Default)]
pub struct RecordingTerminator {
    codes: Mutex<Vec<i32>>,
}

impl RecordingTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().clone()
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, code: i32) {
        self.codes.lock().push(code);
    }
}
