//! File persistence for the contact store.
//!
//! # Responsibility
//! - Serialize the full store to JSON and read it back.
//! - Write timestamped JSON backups and a CSV export.
//!
//! # Invariants
//! - The JSON file is a single object of name -> record; key order in the
//!   file becomes store insertion order on load.
//! - A missing file on load is a recoverable outcome, not an error.
//! - Each operation opens, writes/reads and closes its file within the
//!   call; there is no partial-write recovery.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod csv_export;
mod json_file;

pub use csv_export::export_csv;
pub use json_file::{backup_json, load_json, save_json, LoadOutcome, BACKUP_TIMESTAMP_FORMAT};

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-layer error for file I/O and (de)serialization.
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "file i/o failed: {err}"),
            Self::Json(err) => write!(f, "contacts json is invalid: {err}"),
            Self::Csv(err) => write!(f, "csv export failed: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<csv::Error> for PersistError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
