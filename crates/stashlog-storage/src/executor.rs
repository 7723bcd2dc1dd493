//! SQLite implementation of the stash executor capability.

use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::params_from_iter;
use stashlog_core::{PersistenceError, StashExecutor, StatementOutcome};

use crate::Database;

/// Runs stash statements against a shared [`Database`].
///
/// Logging is synchronous, so the connection is guarded by a blocking mutex
/// and each statement holds it only for its own execution.
pub struct SqliteStashExecutor {
    db: Arc<Mutex<Database>>,
}

impl SqliteStashExecutor {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Arc<Mutex<Database>> {
        &self.db
    }
}

impl StashExecutor for SqliteStashExecutor {
    fn execute(
        &self,
        statement: &str,
        params: &[&str],
    ) -> Result<StatementOutcome, PersistenceError> {
        let db = self.db.lock();
        let rows = db
            .connection()
            .execute(statement, params_from_iter(params.iter()))
            .map_err(PersistenceError::new)?;

        Ok(StatementOutcome::rows(rows as u64))
    }
}
