use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    /// Malformed user input (an amount that does not parse as a number).
    /// Reported to the caller; nothing is mutated.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// An expense referenced a category name with no matching row.
    /// Reported to the caller; no partial write occurs.
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
