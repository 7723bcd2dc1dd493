//! Stashlog Storage Layer
//!
//! SQLite persistence behind the logger's stash.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │          Logger::stash / Logger::stashf              │
//! ├──────────────────────────────────────────────────────┤
//! │      Stash (stashlog-core, LogSender impl)           │
//! ├──────────────────────────────────────────────────────┤
//! │   SqliteStashExecutor (StashExecutor impl)           │
//! ├──────────────────────────────────────────────────────┤
//! │                   Database                           │
//! │                   (SQLite)                           │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use stashlog_core::{global, LogOption};
//! use stashlog_storage::{Database, SqliteStashExecutor};
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let db = Arc::new(Mutex::new(Database::open(&path)?));
//! let executor = Arc::new(SqliteStashExecutor::new(db.clone()));
//!
//! global::init([LogOption::stash_output(executor)]);
//! stashlog_core::stash!("req-42", "latency={}ms", 120);
//! ```

mod database;
mod executor;
mod repositories;

pub use database::Database;
pub use executor::SqliteStashExecutor;
pub use repositories::*;

/// Default database file name.
pub const DATABASE_FILE: &str = "stash.db";

/// Get the default database path for the current platform.
pub fn default_database_path() -> Option<std::path::PathBuf> {
    dirs::data_local_dir().map(|p| p.join("stashlog").join(DATABASE_FILE))
}
