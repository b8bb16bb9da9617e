//! Error types for database operations.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Stored bytes could not be decoded into a record.
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;
