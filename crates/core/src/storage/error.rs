use thiserror::Error;

/// Errors raised while reading from the row source.
///
/// These always reach the caller. A failed read is never reported as an
/// empty listing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Row source unavailable: {0}")]
    Unavailable(String),
    #[error("Row source returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid row source response: {0}")]
    InvalidResponse(String),
}

/// Result type for data-access operations.
pub type Result<T> = std::result::Result<T, SourceError>;
