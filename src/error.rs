use http::StatusCode;

/// Error surfaced by every table operation: a message and an HTTP-like status.
///
/// Only the adapter constructs these. Conditional-check failures keep a 4xx
/// status appropriate to the operation; everything else collapses to 500 with
/// a generic message, with the full error detail available on the diagnostic
/// log channel only.
#[derive(Debug, thiserror::Error)]
#[error("{status_code}: {message}")]
pub struct TableError {
    pub message: String,
    pub status_code: StatusCode,
}

impl TableError {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        TableError {
            message: message.into(),
            status_code,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
    }
}
