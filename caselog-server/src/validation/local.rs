// Local validator
//
// The fallback of record when the remote validator is unreachable. Calls
// the same shared rule the service handler calls, so the two copies agree
// by construction.

use async_trait::async_trait;
use caselog_utils::data::{validate_duration, CreateSessionNoteInput, ValidationVerdict};

use super::error::ValidationResult;
use super::validator::Validator;

/// Pure in-process validator. Never fails to judge.
#[derive(Debug, Default)]
pub struct LocalValidator;

impl LocalValidator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Validator for LocalValidator {
    async fn validate(
        &self,
        input: &CreateSessionNoteInput,
    ) -> ValidationResult<ValidationVerdict> {
        Ok(validate_duration(input.duration_minutes))
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input(duration_minutes: i32) -> CreateSessionNoteInput {
        CreateSessionNoteInput {
            client_name: "Jane Doe".to_string(),
            session_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quick_notes: "Discussed progress".to_string(),
            duration_minutes,
        }
    }

    #[tokio::test]
    async fn test_accepts_in_range_duration() {
        let verdict = LocalValidator::new().validate(&input(60)).await.unwrap();
        assert!(verdict.valid);
        assert_eq!(verdict.error, None);
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_duration() {
        let verdict = LocalValidator::new().validate(&input(10)).await.unwrap();
        assert!(!verdict.valid);
        assert!(verdict.error.unwrap().contains("between 15 and 120"));
    }

    #[tokio::test]
    async fn test_never_errors_even_on_absurd_input() {
        let validator = LocalValidator::new();
        for minutes in [i32::MIN, -1, 0, i32::MAX] {
            assert!(validator.validate(&input(minutes)).await.is_ok());
        }
    }
}
