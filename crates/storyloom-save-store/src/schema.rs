//! Save store database schema.

use sqlx::SqlitePool;

/// SQL to create the saves table.
pub const CREATE_GAME_SAVES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS game_saves (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    player_id TEXT NOT NULL,
    save_data TEXT NOT NULL,
    saved_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_game_saves_player_id
    ON game_saves (player_id, id);
";

/// Creates the saves table and its index if they do not exist yet.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if the statements fail.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_GAME_SAVES_TABLE).execute(pool).await?;
    Ok(())
}
