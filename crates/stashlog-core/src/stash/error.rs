use std::error::Error as StdError;

/// Failure reported by a [`StashExecutor`](super::StashExecutor).
#[derive(Debug, thiserror::Error)]
#[error("persistence executor failed: {source}")]
pub struct PersistenceError {
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl PersistenceError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Error carrying only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(message.into())
    }
}

/// Error type for stash delivery.
#[derive(Debug, thiserror::Error)]
pub enum StashError {
    /// The executor could not issue the write.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The write went through but its rows-affected metadata is missing.
    #[error("stash write did not report rows affected")]
    RowsAffectedUnavailable,

    /// The configured table is not a valid SQL identifier.
    #[error("invalid stash table name: {0:?}")]
    InvalidTable(String),
}
