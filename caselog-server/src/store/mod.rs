// caselog store layer
//
// Async access to the session_notes table. The table is the sole source
// of truth; callers hold transient snapshots refreshed through the
// gateway, never a cache with coherency guarantees.

mod error;
mod memory;
mod postgres;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryNotesStore;
pub use postgres::PgNotesStore;

use async_trait::async_trait;
use caselog_utils::data::{CreateSessionNoteInput, SessionNote};
use uuid::Uuid;

/// Access contract for the session_notes table.
///
/// Three operations, no more: the application never updates a note in
/// place and never reads a single row by id.
#[async_trait]
pub trait NotesStore: Send + Sync {
    /// All notes, most recent session first. Same-day notes are ordered
    /// by creation time, newest first. An empty table yields an empty
    /// vector, not an error.
    async fn select_all(&self) -> StoreResult<Vec<SessionNote>>;

    /// Insert one note and return the stored row. `id` and `created_at`
    /// are generated by the store.
    async fn insert(&self, input: &CreateSessionNoteInput) -> StoreResult<SessionNote>;

    /// Delete the note with the given id. Deleting an id that does not
    /// exist is not an error.
    async fn delete_by_id(&self, id: Uuid) -> StoreResult<()>;
}
