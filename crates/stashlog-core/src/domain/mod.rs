//! Domain types: severities, filters and the ephemeral log record

mod record;
mod severity;

pub use record::{new_request_id, LogRecord};
pub use severity::{LevelFilter, ParseSeverityError, Severity};
