// Request handlers for the validation service

use axum::{body::Bytes, http::StatusCode, Json};
use caselog_utils::data::{validate_duration, ValidationVerdict};
use serde::Deserialize;

/// Candidate fields posted by clients. Only the duration participates in
/// the rule; other fields are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    duration_minutes: i32,
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Judge a candidate session note.
///
/// 200 carries the verdict for both valid and invalid durations; 400 is
/// reserved for bodies that do not parse as a candidate note.
pub async fn validate_session_note(body: Bytes) -> (StatusCode, Json<ValidationVerdict>) {
    let request: ValidateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("caselog: rejecting malformed validation request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ValidationVerdict::fail("Invalid request")),
            );
        }
    };

    (StatusCode::OK, Json(validate_duration(request.duration_minutes)))
}
