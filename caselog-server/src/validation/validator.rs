// Validator trait

use async_trait::async_trait;
use caselog_utils::data::{CreateSessionNoteInput, ValidationVerdict};

use super::error::ValidationResult;
use crate::service;

/// A judge of candidate session notes.
///
/// Implementations must be stateless with respect to judgments: the same
/// input always yields the same verdict, and judging has no side effects.
///
/// # Errors vs. verdicts
///
/// `Err` means the validator could not judge at all (network down,
/// unparsable response). An invalid note is NOT an error: it is
/// `Ok(verdict)` with `valid == false` and a human-readable message.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Judge a candidate note.
    async fn validate(&self, input: &CreateSessionNoteInput)
        -> ValidationResult<ValidationVerdict>;

    /// Name of this validator for logging.
    fn name(&self) -> &str;
}

/// Configuration for remote validation calls
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Endpoint serving the remote copy of the rule
    pub endpoint: String,

    /// Timeout for one validation call in seconds
    pub call_timeout_secs: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("http://{}/validate-session-note", service::DEFAULT_LISTEN),
            call_timeout_secs: 5,
        }
    }
}
