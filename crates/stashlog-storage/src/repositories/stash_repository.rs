//! Read side of the log stash.
//!
//! The logger only ever inserts; this repository is for tooling that looks
//! stashed entries up by request id.

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::params;
use serde::{Deserialize, Serialize};
use stashlog_core::{quote_table, DEFAULT_STASH_TABLE};

use crate::Database;

/// A stashed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashedLog {
    pub id: i64,
    pub request_id: String,
    pub log: String,
    pub created_at: String,
}

/// SQLite-backed reader for one stash table.
pub struct SqliteStashRepository {
    db: Arc<Mutex<Database>>,
    /// Quoted identifier, ready to splice into statements.
    table: String,
}

impl SqliteStashRepository {
    /// Reader for [`DEFAULT_STASH_TABLE`].
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self {
            db,
            table: format!("\"{DEFAULT_STASH_TABLE}\""),
        }
    }

    /// Reader for the table a `Stash::with_table(.., table)` writes to.
    pub fn with_table(db: Arc<Mutex<Database>>, table: &str) -> Result<Self> {
        let table =
            quote_table(table).with_context(|| format!("Invalid stash table name: {:?}", table))?;
        Ok(Self { db, table })
    }

    /// Entries for one request, oldest first.
    pub fn list_for_request(&self, request_id: &str) -> Result<Vec<StashedLog>> {
        let db = self.db.lock();
        let conn = db.connection();

        let mut stmt = conn.prepare(&format!(
            "SELECT id, request_id, log, created_at FROM {}
             WHERE request_id = ?1 ORDER BY id",
            self.table
        ))?;

        let rows = stmt
            .query_map(params![request_id], |row| {
                Ok(StashedLog {
                    id: row.get(0)?,
                    request_id: row.get(1)?,
                    log: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Total number of stashed entries.
    pub fn count(&self) -> Result<u64> {
        let db = self.db.lock();
        let count: i64 = db.connection().query_row(
            &format!("SELECT COUNT(*) FROM {}", self.table),
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Delete every entry for a request; returns how many were removed.
    pub fn clear_request(&self, request_id: &str) -> Result<usize> {
        let db = self.db.lock();
        let removed = db.connection().execute(
            &format!("DELETE FROM {} WHERE request_id = ?1", self.table),
            params![request_id],
        )?;
        Ok(removed)
    }
}
