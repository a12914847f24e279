//! Save repository abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Stored representation of a saved game.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRecord {
    /// Player this save belongs to.
    pub player_id: String,
    /// Serialized game snapshot.
    pub payload: serde_json::Value,
    /// Timestamp of the save.
    pub saved_at: DateTime<Utc>,
}

/// Repository trait for appending and reading back saved games.
///
/// Saves are append-only: every call to `append_save` adds a new record and
/// earlier records for the same player are retained.
#[async_trait]
pub trait SaveRepository: Send + Sync {
    /// Append a new save record.
    async fn append_save(&self, record: &SaveRecord) -> Result<(), DomainError>;

    /// Load the most recently appended save for `player_id`, if any.
    async fn load_latest(&self, player_id: &str) -> Result<Option<SaveRecord>, DomainError>;
}
