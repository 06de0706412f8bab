//! Error types for ab-display.

use thiserror::Error;

/// Errors that can occur while drawing to the terminal.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, DisplayError>`.
pub type DisplayResult<T> = Result<T, DisplayError>;
