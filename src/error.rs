//! Error types for LogForge
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ForgeError
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Unified error type for LogForge operations
#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Datastore Errors
    // -------------------------------------------------------------------------
    /// Open/pragma/query/constraint failures from SQLite, propagated verbatim.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    /// Metadata could not be encoded; the write is aborted with no partial row.
    #[error("metadata serialization failed: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    /// Boundary-level rejection of a record draft (missing message, bad level).
    #[error("invalid record: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
