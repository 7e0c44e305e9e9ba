// Store error types

use std::fmt;

/// Errors that can occur during store operations
#[derive(Debug)]
pub enum StoreError {
    /// Database connection failed
    ConnectionFailed(String),
    /// Database query failed
    QueryFailed(String),
    /// Migration failed
    MigrationFailed(String),
    /// Database pool exhausted
    PoolExhausted,
    /// Database unavailable
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Database connection failed: {}", msg),
            Self::QueryFailed(msg) => write!(f, "Database query failed: {}", msg),
            Self::MigrationFailed(msg) => write!(f, "Database migration failed: {}", msg),
            Self::PoolExhausted => write!(f, "Database connection pool exhausted"),
            Self::Unavailable(msg) => write!(f, "Database unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::QueryFailed("Row not found".to_string()),
            sqlx::Error::PoolTimedOut => Self::PoolExhausted,
            sqlx::Error::PoolClosed => Self::Unavailable("Pool closed".to_string()),
            _ => Self::QueryFailed(err.to_string()),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
