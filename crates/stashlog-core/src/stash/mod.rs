//! Remote log stash
//!
//! Selected log entries can be forwarded to a persistent store keyed by a
//! request identifier. The logger only knows the [`LogSender`] contract;
//! [`Stash`] is the stock sender, which issues one parameterized insert per
//! record through a [`StashExecutor`] supplied by the storage layer.

mod error;

pub use error::{PersistenceError, StashError};

use std::fmt;
use std::sync::Arc;

/// Table written to when no table name is given.
pub const DEFAULT_STASH_TABLE: &str = "log_stash";

/// Delivers one log entry for a request.
pub trait LogSender: Send + Sync {
    fn send(&self, request_id: &str, log: &str) -> Result<(), StashError>;
}

/// Outcome metadata reported by an executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatementOutcome {
    /// `None` when the backend could not report it.
    pub rows_affected: Option<u64>,
}

impl StatementOutcome {
    pub fn rows(rows_affected: u64) -> Self {
        Self {
            rows_affected: Some(rows_affected),
        }
    }
}

/// Persistence capability: run one statement with positional text
/// parameters (`?1`, `?2`, ...).
pub trait StashExecutor: Send + Sync {
    fn execute(&self, statement: &str, params: &[&str]) -> Result<StatementOutcome, PersistenceError>;
}

/// Sender that inserts `(request_id, log)` rows into a fixed table.
#[derive(Clone)]
pub struct Stash {
    executor: Arc<dyn StashExecutor>,
    table: String,
    statement: Option<String>,
}

impl Stash {
    /// Stash into [`DEFAULT_STASH_TABLE`].
    pub fn new(executor: Arc<dyn StashExecutor>) -> Self {
        Self::with_table(executor, DEFAULT_STASH_TABLE)
    }

    /// Stash into `table`.
    ///
    /// Table names cannot be bound as statement parameters, so the name is
    /// checked here and quoted into the statement. An invalid name is not
    /// rejected at construction; every `send` then fails with
    /// [`StashError::InvalidTable`].
    pub fn with_table(executor: Arc<dyn StashExecutor>, table: impl Into<String>) -> Self {
        let table = table.into();
        let statement = quote_table(&table)
            .map(|quoted| format!("INSERT INTO {quoted} (request_id, log) VALUES (?1, ?2)"));
        Self {
            executor,
            table,
            statement,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// The insert statement, if the table name is valid.
    pub fn statement(&self) -> Option<&str> {
        self.statement.as_deref()
    }
}

impl LogSender for Stash {
    fn send(&self, request_id: &str, log: &str) -> Result<(), StashError> {
        let statement = self
            .statement
            .as_deref()
            .ok_or_else(|| StashError::InvalidTable(self.table.clone()))?;

        let outcome = self.executor.execute(statement, &[request_id, log])?;
        outcome
            .rows_affected
            .ok_or(StashError::RowsAffectedUnavailable)?;

        Ok(())
    }
}

impl fmt::Debug for Stash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stash")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

/// Quote `schema.table` or `table` as SQL identifiers.
///
/// Each part must match `[A-Za-z_][A-Za-z0-9_]*`; anything else yields
/// `None`. Storage code uses this to address the same table a [`Stash`]
/// writes to.
pub fn quote_table(table: &str) -> Option<String> {
    let parts: Vec<&str> = table.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|p| is_identifier(p)) {
        return None;
    }
    Some(
        parts
            .iter()
            .map(|p| format!("\"{p}\""))
            .collect::<Vec<_>>()
            .join("."),
    )
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
