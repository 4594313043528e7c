//! Error types for email ingestion

use thiserror::Error;

/// Errors that abort ingestion of one message.
///
/// Charset decode failures and unresolvable attachment filenames are not
/// errors; they degrade (replacement characters, dropped candidate). A
/// missing Content-Type header is reported through
/// [`ParseOutcome::UnsupportedFormat`](crate::ParseOutcome), not here.
#[derive(Error, Debug)]
pub enum IngestError {
    /// mailparse could not make sense of the message at all
    #[error("failed to parse message structure: {0}")]
    Structure(String),

    /// Source read, directory creation, or attachment write failed.
    /// Fatal for the message: callers must not persist a partial record.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;
