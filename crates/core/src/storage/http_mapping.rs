//! Pure functions for mapping source errors to HTTP status codes.

use super::SourceError;

/// Maps a [`SourceError`] to an HTTP status code.
///
/// - `Unavailable` -> 503 (Service Unavailable)
/// - `Status` -> 502 (Bad Gateway)
/// - `InvalidResponse` -> 502 (Bad Gateway)
///
/// # Examples
///
/// ```
/// use eventlog_core::storage::{source_error_to_status_code, SourceError};
///
/// let error = SourceError::Unavailable("connection refused".to_string());
/// assert_eq!(source_error_to_status_code(&error), 503);
/// ```
pub fn source_error_to_status_code(error: &SourceError) -> u16 {
    match error {
        SourceError::Unavailable(_) => 503,
        SourceError::Status { .. } => 502,
        SourceError::InvalidResponse(_) => 502,
    }
}
