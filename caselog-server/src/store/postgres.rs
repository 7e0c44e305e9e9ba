// PostgreSQL store

use async_trait::async_trait;
use caselog_utils::data::{CreateSessionNoteInput, SessionNote};
use log::info;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use uuid::Uuid;

use super::{
    error::{StoreError, StoreResult},
    NotesStore,
};

/// sqlx-backed implementation of [`NotesStore`] over the session_notes
/// table.
pub struct PgNotesStore {
    pool: PgPool,
}

impl PgNotesStore {
    /// Connect to the database and bring the schema up to date.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        info!("caselog: PostgreSQL connection pool established");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))?;
        info!("caselog: database migrations applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl NotesStore for PgNotesStore {
    async fn select_all(&self) -> StoreResult<Vec<SessionNote>> {
        let notes = sqlx::query_as::<_, SessionNote>(
            "SELECT id, client_name, session_date, quick_notes, duration_minutes, created_at
             FROM session_notes
             ORDER BY session_date DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn insert(&self, input: &CreateSessionNoteInput) -> StoreResult<SessionNote> {
        let note = sqlx::query_as::<_, SessionNote>(
            "INSERT INTO session_notes (client_name, session_date, quick_notes, duration_minutes)
             VALUES ($1, $2, $3, $4)
             RETURNING id, client_name, session_date, quick_notes, duration_minutes, created_at",
        )
        .bind(&input.client_name)
        .bind(input.session_date)
        .bind(&input.quick_notes)
        .bind(input.duration_minutes)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<()> {
        sqlx::query("DELETE FROM session_notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
