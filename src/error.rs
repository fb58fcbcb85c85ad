//! Error types for the two recoverable failure families: bad form input and
//! storage failures. Setup and terminal problems travel as `anyhow::Error`.

use thiserror::Error;

/// Problems found while turning raw form text into typed values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} is required.")]
    Missing { field: String },
    #[error("{field} must be {expected}, got '{value}'.")]
    Malformed {
        field: String,
        value: String,
        expected: &'static str,
    },
    #[error("Expected {expected} values but the form returned {actual}.")]
    FieldCount { expected: usize, actual: usize },
}

/// Failures raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert collided with an existing primary key or unique column.
    #[error("{entity} '{key}' already exists.")]
    Conflict { entity: &'static str, key: String },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
