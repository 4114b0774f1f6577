//! Error types for jafr.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in jafr operations.
#[derive(Error, Debug)]
pub enum JafrError {
    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Jafr's chosen master directory does not exist.")]
    MasterDirMissing(PathBuf),

    #[error("Missing tasks.md or meetings.md file.")]
    StoreMissing(PathBuf),

    #[error("Malformed user registry at line {line}: expected 7 fields, found {fields}")]
    RegistryMalformed { line: usize, fields: usize },

    #[error("User '{0}' is not in the user registry")]
    UnknownUser(String),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for jafr operations.
pub type JafrResult<T> = Result<T, JafrError>;

/// Why a single line could not be read as a task or meeting record.
///
/// These never abort anything; the offending line is skipped and reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing '{0}' separator")]
    MissingSeparator(&'static str),

    #[error("more than one '{0}' separator")]
    RepeatedSeparator(&'static str),

    #[error("no 'complete' or 'not complete' status after the due date")]
    MissingStatus,

    #[error("expected a time and a date after 'Scheduled:', found {0} field(s)")]
    FieldCount(usize),
}
