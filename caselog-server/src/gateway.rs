// caselog notes gateway
//
// Orchestrates fetch/create/delete against the store, invoking the
// validator before any insert and re-selecting the full collection after
// each mutation. Owns the only in-memory copy of the notes: a snapshot
// replaced wholesale on refresh, never patched.

use caselog_utils::data::{CreateSessionNoteInput, SessionNote, QUICK_NOTES_MAX_CHARS};
use chrono::{NaiveDate, Utc};
use log::error;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::store::NotesStore;
use crate::validation::Validator;

/// Pre-network input rejections. Nothing has been contacted when one of
/// these is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Duration must be a valid number")]
    InvalidDuration,
    #[error("Notes must be {max} characters or less")]
    NotesTooLong { max: usize },
    #[error("Session date cannot be in the future")]
    DateInFuture,
}

/// Everything a gateway operation can fail with. The Display text of the
/// variant is exactly the message shown to the user.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// The validator judged the note invalid; carries its message verbatim.
    #[error("{0}")]
    Invalid(String),

    /// No judgment could be produced at all. Unreachable under the
    /// fallback policy; kept so a misconfigured validator still surfaces.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store reported a failure; carries its message.
    #[error("{0}")]
    Store(String),
}

/// Trim and pre-check caller input. No network, no store.
fn prepare_input(
    mut input: CreateSessionNoteInput,
    today: NaiveDate,
) -> Result<CreateSessionNoteInput, InputError> {
    input.client_name = input.client_name.trim().to_string();
    input.quick_notes = input.quick_notes.trim().to_string();

    if input.client_name.is_empty() || input.quick_notes.is_empty() {
        return Err(InputError::MissingFields);
    }
    if input.duration_minutes < 1 {
        return Err(InputError::InvalidDuration);
    }
    if input.quick_notes.chars().count() > QUICK_NOTES_MAX_CHARS {
        return Err(InputError::NotesTooLong {
            max: QUICK_NOTES_MAX_CHARS,
        });
    }
    if input.session_date > today {
        return Err(InputError::DateInFuture);
    }
    Ok(input)
}

/// Orchestration layer between the UI and persistent storage.
pub struct NotesGateway {
    store: Arc<dyn NotesStore>,
    validator: Arc<dyn Validator>,
    notes: Vec<SessionNote>,
    loading: bool,
    error: Option<String>,
}

impl NotesGateway {
    /// A fresh gateway reports `loading` until the first refresh resolves,
    /// so the UI can distinguish "still fetching" from "empty".
    pub fn new(store: Arc<dyn NotesStore>, validator: Arc<dyn Validator>) -> Self {
        Self {
            store,
            validator,
            notes: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Current snapshot, most recent session first.
    pub fn notes(&self) -> &[SessionNote] {
        &self.notes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The single current error message, if the last operation failed.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-select the full collection and replace the snapshot wholesale.
    /// On failure the previous snapshot stays on screen and the error is
    /// surfaced.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        self.loading = true;
        self.error = None;

        let result = self.store.select_all().await;
        self.loading = false;

        match result {
            Ok(notes) => {
                self.notes = notes;
                Ok(())
            }
            Err(e) => {
                error!("caselog: failed to fetch notes: {}", e);
                Err(self.report(GatewayError::Store(e.to_string())))
            }
        }
    }

    /// Validate and insert one note, then refresh the snapshot.
    ///
    /// Input checks reject before the validator or store is contacted;
    /// an invalid verdict rejects before the store is contacted. Either
    /// way a failed create inserts nothing.
    pub async fn create(&mut self, input: CreateSessionNoteInput) -> Result<(), GatewayError> {
        self.error = None;

        let input = match prepare_input(input, Utc::now().date_naive()) {
            Ok(input) => input,
            Err(e) => return Err(self.report(e.into())),
        };

        let verdict = match self.validator.validate(&input).await {
            Ok(verdict) => verdict,
            Err(e) => return Err(self.report(GatewayError::Validation(e.to_string()))),
        };
        if !verdict.valid {
            let message = verdict
                .error
                .unwrap_or_else(|| "Validation failed".to_string());
            return Err(self.report(GatewayError::Invalid(message)));
        }

        if let Err(e) = self.store.insert(&input).await {
            error!("caselog: failed to create note: {}", e);
            return Err(self.report(GatewayError::Store(e.to_string())));
        }

        self.refresh().await
    }

    /// Delete by id, then refresh the snapshot. A missing id is not an
    /// error.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), GatewayError> {
        self.error = None;

        if let Err(e) = self.store.delete_by_id(id).await {
            error!("caselog: failed to delete note: {}", e);
            return Err(self.report(GatewayError::Store(e.to_string())));
        }

        self.refresh().await
    }

    fn report(&mut self, e: GatewayError) -> GatewayError {
        self.error = Some(e.to_string());
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryNotesStore;
    use crate::validation::{
        FallbackValidator, LocalValidator, MockValidator, ValidationError,
    };
    use caselog_utils::data::ValidationVerdict;
    use std::sync::atomic::Ordering;

    fn input(duration_minutes: i32) -> CreateSessionNoteInput {
        CreateSessionNoteInput {
            client_name: "Jane Doe".to_string(),
            session_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quick_notes: "Discussed progress".to_string(),
            duration_minutes,
        }
    }

    fn gateway_with_local(store: Arc<MemoryNotesStore>) -> NotesGateway {
        NotesGateway::new(store, Arc::new(LocalValidator::new()))
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_duration_without_insert() {
        let store = Arc::new(MemoryNotesStore::new());
        let mut gateway = gateway_with_local(store.clone());

        let err = gateway.create(input(10)).await.unwrap_err();

        assert!(matches!(err, GatewayError::Invalid(_)));
        assert!(err.to_string().contains("between 15 and 120"));
        assert_eq!(gateway.last_error(), Some(err.to_string().as_str()));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_persists_valid_note_and_refreshes() {
        let store = Arc::new(MemoryNotesStore::new());
        let mut gateway = gateway_with_local(store.clone());

        gateway.create(input(60)).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(gateway.notes().len(), 1);
        let note = &gateway.notes()[0];
        assert_eq!(note.client_name, "Jane Doe");
        assert_eq!(note.session_date.to_string(), "2024-01-15");
        assert_eq!(note.quick_notes, "Discussed progress");
        assert_eq!(note.duration_minutes, 60);
        assert_eq!(gateway.last_error(), None);
        assert!(!gateway.is_loading());
    }

    #[tokio::test]
    async fn test_create_trims_text_fields() {
        let store = Arc::new(MemoryNotesStore::new());
        let mut gateway = gateway_with_local(store);

        let mut untrimmed = input(60);
        untrimmed.client_name = "  Jane Doe  ".to_string();
        untrimmed.quick_notes = " Discussed progress\n".to_string();
        gateway.create(untrimmed).await.unwrap();

        let note = &gateway.notes()[0];
        assert_eq!(note.client_name, "Jane Doe");
        assert_eq!(note.quick_notes, "Discussed progress");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields_before_validation() {
        let store = Arc::new(MemoryNotesStore::new());
        let mock = MockValidator::new("mock");
        let calls = mock.call_counter();
        let mut gateway = NotesGateway::new(store.clone(), Arc::new(mock));

        let mut blank = input(60);
        blank.client_name = "   ".to_string();
        let err = gateway.create(blank).await.unwrap_err();

        assert!(matches!(
            err,
            GatewayError::Input(InputError::MissingFields)
        ));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_oversized_notes_before_validation() {
        let store = Arc::new(MemoryNotesStore::new());
        let mock = MockValidator::new("mock");
        let calls = mock.call_counter();
        let mut gateway = NotesGateway::new(store.clone(), Arc::new(mock));

        let mut oversized = input(60);
        oversized.quick_notes = "x".repeat(501);
        let err = gateway.create(oversized).await.unwrap_err();

        assert!(matches!(
            err,
            GatewayError::Input(InputError::NotesTooLong { max: 500 })
        ));
        assert!(err.to_string().contains("500"));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_nonpositive_duration_before_validation() {
        let store = Arc::new(MemoryNotesStore::new());
        let mock = MockValidator::new("mock");
        let calls = mock.call_counter();
        let mut gateway = NotesGateway::new(store.clone(), Arc::new(mock));

        let err = gateway.create(input(0)).await.unwrap_err();

        assert!(matches!(
            err,
            GatewayError::Input(InputError::InvalidDuration)
        ));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_future_session_date() {
        let store = Arc::new(MemoryNotesStore::new());
        let mut gateway = gateway_with_local(store.clone());

        let mut future = input(60);
        future.session_date = NaiveDate::from_ymd_opt(9999, 1, 1).unwrap();
        let err = gateway.create(future).await.unwrap_err();

        assert!(matches!(err, GatewayError::Input(InputError::DateInFuture)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_reports_verdict_message_verbatim() {
        let store = Arc::new(MemoryNotesStore::new());
        let mock = MockValidator::new("mock");
        mock.set_response(Ok(ValidationVerdict::fail("Too short for billing")));
        let mut gateway = NotesGateway::new(store.clone(), Arc::new(mock));

        let err = gateway.create(input(60)).await.unwrap_err();

        assert_eq!(err.to_string(), "Too short for billing");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_without_user_facing_error() {
        let store = Arc::new(MemoryNotesStore::new());
        let dead_remote = MockValidator::new("remote");
        dead_remote.set_response(Err(ValidationError::Unreachable(
            "connection refused".to_string(),
        )));
        let validator = FallbackValidator::new(
            Box::new(dead_remote),
            Box::new(LocalValidator::new()),
        );
        let mut gateway = NotesGateway::new(store.clone(), Arc::new(validator));

        gateway.create(input(60)).await.unwrap();

        assert_eq!(gateway.last_error(), None);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_that_record() {
        let store = Arc::new(MemoryNotesStore::new());
        let keep = store.insert(&input(60)).await.unwrap();
        let doomed = store.insert(&input(90)).await.unwrap();
        let mut gateway = gateway_with_local(store.clone());
        gateway.refresh().await.unwrap();
        assert_eq!(gateway.notes().len(), 2);

        gateway.delete(doomed.id).await.unwrap();

        assert_eq!(gateway.notes().len(), 1);
        assert_eq!(gateway.notes()[0].id, keep.id);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_ok() {
        let store = Arc::new(MemoryNotesStore::new());
        let mut gateway = gateway_with_local(store);

        gateway.delete(Uuid::new_v4()).await.unwrap();
        assert_eq!(gateway.last_error(), None);
    }

    #[tokio::test]
    async fn test_refresh_orders_most_recent_first() {
        let store = Arc::new(MemoryNotesStore::new());
        for date in ["2024-01-01", "2024-03-01", "2024-02-01"] {
            let mut note = input(60);
            note.session_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
            store.insert(&note).await.unwrap();
        }
        let mut gateway = gateway_with_local(store);

        gateway.refresh().await.unwrap();

        let dates: Vec<String> = gateway
            .notes()
            .iter()
            .map(|n| n.session_date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_snapshot() {
        let store = Arc::new(MemoryNotesStore::new());
        store.insert(&input(60)).await.unwrap();
        let mut gateway = gateway_with_local(store.clone());
        gateway.refresh().await.unwrap();

        store.set_fail(Some("connection reset"));
        let err = gateway.refresh().await.unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert_eq!(gateway.notes().len(), 1);
        assert!(gateway.last_error().unwrap().contains("connection reset"));
        assert!(!gateway.is_loading());
    }

    #[tokio::test]
    async fn test_new_attempt_clears_prior_error() {
        let store = Arc::new(MemoryNotesStore::new());
        let mut gateway = gateway_with_local(store);

        gateway.create(input(10)).await.unwrap_err();
        assert!(gateway.last_error().is_some());

        gateway.create(input(60)).await.unwrap();
        assert_eq!(gateway.last_error(), None);
    }

    #[tokio::test]
    async fn test_store_failure_on_insert_is_reported_with_store_message() {
        let store = Arc::new(MemoryNotesStore::new());
        store.set_fail(Some("disk full"));
        let mut gateway = gateway_with_local(store.clone());

        let err = gateway.create(input(60)).await.unwrap_err();

        assert!(matches!(err, GatewayError::Store(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
