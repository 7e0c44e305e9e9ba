// caselog validation layer
//
// The duration rule exists in two places with identical semantics: the
// HTTP validation service (see crate::service) and the local pure
// function. This module provides a single Validator interface over both,
// plus the fallback policy that makes remote unavailability invisible to
// the user:
//
// ```text
// Gateway
//    │
//    ▼
// ┌───────────────────┐
// │ FallbackValidator │  ← try remote, on any failure use local
// └───────────────────┘
//    │             │
//    ▼             ▼
// RemoteValidator  LocalValidator
// (HTTP, isahc)    (pure function)
// ```
//
// A validator error means "no judgment could be produced"; an invalid
// verdict is a judgment and is reported verbatim to the user.

mod error;
mod fallback;
mod local;
mod mock;
mod remote;
mod validator;

pub use error::{ValidationError, ValidationResult};
pub use fallback::FallbackValidator;
pub use local::LocalValidator;
pub use mock::MockValidator;
pub use remote::RemoteValidator;
pub use validator::{Validator, ValidatorConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use caselog_utils::data::CreateSessionNoteInput;
    use chrono::NaiveDate;

    fn input(duration_minutes: i32) -> CreateSessionNoteInput {
        CreateSessionNoteInput {
            client_name: "Jane Doe".to_string(),
            session_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quick_notes: "Discussed progress".to_string(),
            duration_minutes,
        }
    }

    /// Full fallback workflow: a dead remote never surfaces as an error,
    /// and the local rule still rejects out-of-range durations.
    #[tokio::test]
    async fn test_fallback_workflow() {
        let primary = MockValidator::new("remote");
        primary.set_response(Err(ValidationError::Unreachable(
            "connection refused".to_string(),
        )));

        let validator =
            FallbackValidator::new(Box::new(primary), Box::new(LocalValidator::new()));

        let verdict = validator.validate(&input(60)).await.unwrap();
        assert!(verdict.valid);

        let verdict = validator.validate(&input(10)).await.unwrap();
        assert!(!verdict.valid);
        assert!(verdict.error.unwrap().contains("between 15 and 120"));
    }
}
