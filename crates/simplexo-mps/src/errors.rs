use thiserror::Error;

/// Result type for MPS ingestion
pub type Result<T> = std::result::Result<T, MpsError>;

/// Errors that can occur while reading an MPS file
#[derive(Error, Debug)]
pub enum MpsError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line or numeric field
    #[error("invalid MPS line {line}: {reason}")]
    InvalidFormat { line: usize, reason: String },

    /// Reference to a row not declared in the ROWS section
    #[error("unknown row name: {0}")]
    UnknownRow(String),

    /// Reference to a column not declared in the COLUMNS section
    #[error("unknown column name: {0}")]
    UnknownColumn(String),

    /// No `N` row found in the ROWS section
    #[error("missing objective row")]
    MissingObjective,
}
