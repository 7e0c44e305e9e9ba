// Validation error types
//
// These describe a validator that failed to produce a judgment. They are
// never shown to the user directly; the fallback policy recovers from
// all of them.

use std::fmt;

/// Errors that can occur while obtaining a validation judgment
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// The remote validator could not be reached
    Unreachable(String),

    /// The remote validator did not answer in time
    Timeout { duration_secs: u64 },

    /// The remote validator answered with a status that carries no verdict
    UnexpectedStatus { status: u16 },

    /// The response (or the request payload) could not be encoded/decoded
    ParseError(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable(msg) => write!(f, "Validation service unreachable: {}", msg),
            Self::Timeout { duration_secs } => {
                write!(f, "Validation call timed out after {}s", duration_secs)
            }
            Self::UnexpectedStatus { status } => {
                write!(f, "Validation service answered with status {}", status)
            }
            Self::ParseError(msg) => write!(f, "Failed to parse validation payload: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
