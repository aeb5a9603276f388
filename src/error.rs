use thiserror::Error;

/// Errors surfaced by the ledger core. The presentation layer is
/// responsible for displaying them; nothing here is retried or logged.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger file '{0}' not found. Initialize the ledger before reading it.")]
    NotFound(String),

    #[error("Failed to parse row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
