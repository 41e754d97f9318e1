use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds shared by every layer, so callers can match on the failure
/// class without knowing which crate produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoFiles,
    InvalidColumn,
    InvalidOperation,
    NotANumber,
    FileOpen,
    CsvRead,
    Cancelled,
    Output,
    Runtime,
    Config,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialize(e.to_string())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::InvalidOperation(_) => ErrorKind::InvalidOperation,
            Error::Serialize(_) => ErrorKind::Output,
        }
    }
}
