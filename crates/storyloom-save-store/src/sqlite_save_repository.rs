//! `SQLite` implementation of the `SaveRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use storyloom_core::error::DomainError;
use storyloom_core::repository::{SaveRecord, SaveRepository};

/// SQLite-backed save repository. Every save is a new row; the latest row
/// per player wins on load.
#[derive(Debug, Clone)]
pub struct SqliteSaveRepository {
    pool: SqlitePool,
}

impl SqliteSaveRepository {
    /// Creates a new `SqliteSaveRepository`.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn infrastructure(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::Infrastructure(format!("{context}: {err}"))
}

#[async_trait]
impl SaveRepository for SqliteSaveRepository {
    async fn append_save(&self, record: &SaveRecord) -> Result<(), DomainError> {
        let save_data = serde_json::to_string(&record.payload)
            .map_err(|e| infrastructure("save serialization failed", e))?;

        sqlx::query("INSERT INTO game_saves (player_id, save_data, saved_at) VALUES (?, ?, ?)")
            .bind(&record.player_id)
            .bind(save_data)
            .bind(record.saved_at)
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure("save insert failed", e))?;

        debug!(player_id = %record.player_id, "save appended");
        Ok(())
    }

    async fn load_latest(&self, player_id: &str) -> Result<Option<SaveRecord>, DomainError> {
        let row = sqlx::query(
            "SELECT save_data, saved_at FROM game_saves \
             WHERE player_id = ? ORDER BY id DESC LIMIT 1",
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infrastructure("save query failed", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let save_data: String = row
            .try_get("save_data")
            .map_err(|e| infrastructure("save row decode failed", e))?;
        let saved_at: DateTime<Utc> = row
            .try_get("saved_at")
            .map_err(|e| infrastructure("save row decode failed", e))?;
        let payload = serde_json::from_str(&save_data)
            .map_err(|e| infrastructure("save data is not valid JSON", e))?;

        Ok(Some(SaveRecord {
            player_id: player_id.to_owned(),
            payload,
            saved_at,
        }))
    }
}
