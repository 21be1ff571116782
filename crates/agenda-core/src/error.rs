//! Error types for the agenda library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Appointment not found for the given ID
    #[error("Appointment with ID {id} not found")]
    AppointmentNotFound { id: u64 },
    /// Invoice not found for the given ID
    #[error("Invoice with ID {id} not found")]
    InvoiceNotFound { id: u64 },
    /// Product not found for the given ID
    #[error("Product with ID {id} not found")]
    ProductNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AgendaError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an invalid input error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| AgendaError::database_error(message, e))
    }
}

/// Result type alias for agenda operations
pub type Result<T> = std::result::Result<T, AgendaError>;
