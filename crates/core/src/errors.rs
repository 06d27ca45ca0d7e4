//! Core error types for the gratitude garden application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic. Every failure is request-scoped: no variant signals
/// a state that requires shutdown or repair.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist (or no longer exists).
    #[error("{0} not found: {1}")]
    NotFound(&'static str, i64),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Catch-all for storage internals that have no dedicated variant.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation failures on user-supplied input.
///
/// These are always recoverable: the caller can correct the input and retry.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing or empty")]
    MissingField(&'static str),
}

impl Error {
    /// True when the error maps to a missing record rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NotFound(_, _) | Error::Database(DatabaseError::NotFound(_))
        )
    }
}
