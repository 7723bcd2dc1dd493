//! Repository implementations using SQLite.

mod stash_repository;

pub use stash_repository::{SqliteStashRepository, StashedLog};
