// In-memory store
//
// Implements the same contract as the PostgreSQL store, including the
// ordering guarantee, so the gateway and client can be exercised without
// a database. Failures can be injected to test error surfacing.

use async_trait::async_trait;
use caselog_utils::data::{CreateSessionNoteInput, SessionNote};
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use super::{
    error::{StoreError, StoreResult},
    NotesStore,
};

/// In-process [`NotesStore`] used by tests.
#[derive(Default)]
pub struct MemoryNotesStore {
    rows: Mutex<Vec<SessionNote>>,
    fail_with: Mutex<Option<String>>,
}

impl MemoryNotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following operation fail with the given message, or
    /// clear the injected failure with `None`.
    pub fn set_fail(&self, message: Option<&str>) {
        *self.fail_with.lock().unwrap() = message.map(|m| m.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_failure(&self) -> StoreResult<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::QueryFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NotesStore for MemoryNotesStore {
    async fn select_all(&self) -> StoreResult<Vec<SessionNote>> {
        self.check_failure()?;
        let mut notes = self.rows.lock().unwrap().clone();
        notes.sort_by(|a, b| {
            b.session_date
                .cmp(&a.session_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(notes)
    }

    async fn insert(&self, input: &CreateSessionNoteInput) -> StoreResult<SessionNote> {
        self.check_failure()?;
        let note = SessionNote {
            id: Uuid::new_v4(),
            client_name: input.client_name.clone(),
            session_date: input.session_date,
            quick_notes: input.quick_notes.clone(),
            duration_minutes: input.duration_minutes,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<()> {
        self.check_failure()?;
        self.rows.lock().unwrap().retain(|note| note.id != id);
        Ok(())
    }
}
