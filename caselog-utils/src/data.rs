// Session note records and the duration rule

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shortest session length accepted, in minutes.
pub const MIN_SESSION_MINUTES: i32 = 15;

/// Longest session length accepted, in minutes.
pub const MAX_SESSION_MINUTES: i32 = 120;

/// Maximum length of the quick-notes field, in characters.
pub const QUICK_NOTES_MAX_CHARS: usize = 500;

/// Session note record corresponding to the session_notes table.
///
/// `id` and `created_at` are generated by the store and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionNote {
    pub id: Uuid,
    pub client_name: String,
    pub session_date: NaiveDate,
    pub quick_notes: String,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a session note before `id` and `created_at`
/// exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionNoteInput {
    pub client_name: String,
    pub session_date: NaiveDate,
    pub quick_notes: String,
    pub duration_minutes: i32,
}

/// A pure judgment on a candidate note. No side effects; `error` is only
/// present when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationVerdict {
    pub fn pass() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// The duration rule. Total over all `i32` values and side-effect free.
///
/// This is the only place the bound is written down: the validation
/// service and the local fallback both call this function, so the two
/// copies of the rule cannot drift apart.
pub fn validate_duration(minutes: i32) -> ValidationVerdict {
    if minutes < MIN_SESSION_MINUTES || minutes > MAX_SESSION_MINUTES {
        return ValidationVerdict::fail(format!(
            "Session duration must be between {} and {} minutes",
            MIN_SESSION_MINUTES, MAX_SESSION_MINUTES
        ));
    }
    ValidationVerdict::pass()
}
