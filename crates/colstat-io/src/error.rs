use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use colstat_core::ErrorKind;
use thiserror::Error;

/// Result type local to colstat-io.
pub type Result<T> = std::result::Result<T, ReadError>;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid column: {0}")]
    ColumnIndex(usize),

    #[error("invalid column: file has only {fields} columns")]
    InvalidColumn { fields: usize },

    #[error("not a number: {0}")]
    NotANumber(#[source] ParseFloatError),

    #[error("cannot read data from file: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot read data from file: record on line {line}: wrong number of fields (expected {expected}, found {found})")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("extraction cancelled")]
    Cancelled,
}

impl ReadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::Open { .. } => ErrorKind::FileOpen,
            ReadError::ColumnIndex(_) | ReadError::InvalidColumn { .. } => {
                ErrorKind::InvalidColumn
            }
            ReadError::NotANumber(_) => ErrorKind::NotANumber,
            ReadError::Csv(_) | ReadError::FieldCount { .. } => ErrorKind::CsvRead,
            ReadError::Cancelled => ErrorKind::Cancelled,
        }
    }
}
