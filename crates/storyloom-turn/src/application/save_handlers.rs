//! Command handlers for saving and loading games.
//!
//! Saves are appended to the repository; a load reads the latest save for
//! the player and replaces their in-memory state wholesale.

use storyloom_core::clock::Clock;
use storyloom_core::command::Command;
use storyloom_core::error::DomainError;
use storyloom_core::repository::{SaveRecord, SaveRepository};
use storyloom_game_state::domain::game_state::{GameSnapshot, GameState};
use tracing::{info, instrument};

use crate::application::sessions::PlayerSessions;
use crate::domain::commands::{LoadGame, SaveGame};

fn validate_player_id(player_id: &str) -> Result<(), DomainError> {
    if player_id.trim().is_empty() {
        return Err(DomainError::Validation("player_id is required".to_owned()));
    }
    Ok(())
}

/// Handles the `SaveGame` command: appends the given snapshot, or the
/// player's current state when none is given, as a new save record.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the player id is blank, or
/// `DomainError::Infrastructure` if the snapshot cannot be serialized or
/// the repository fails.
#[instrument(
    skip_all,
    fields(correlation_id = %command.correlation_id(), player_id = %command.player_id)
)]
pub async fn handle_save_game(
    command: &SaveGame,
    clock: &dyn Clock,
    sessions: &PlayerSessions,
    repo: &dyn SaveRepository,
) -> Result<GameSnapshot, DomainError> {
    validate_player_id(&command.player_id)?;
    info!(command_type = command.command_type(), "handling save_game command");

    let snapshot = match &command.snapshot {
        Some(snapshot) => snapshot.clone(),
        None => sessions.snapshot(&command.player_id).await,
    };

    let payload = serde_json::to_value(&snapshot)
        .map_err(|e| DomainError::Infrastructure(format!("snapshot serialization failed: {e}")))?;

    repo.append_save(&SaveRecord {
        player_id: command.player_id.clone(),
        payload,
        saved_at: clock.now(),
    })
    .await?;

    Ok(snapshot)
}

/// Handles the `LoadGame` command: reads the player's latest save and, if
/// there is one, makes it the player's current state.
///
/// Returns the loaded state, or `None` when the player has never saved. In
/// that case the in-memory state is left untouched.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the player id is blank, or
/// `DomainError::Infrastructure` if the repository fails or the stored
/// payload is not a valid snapshot.
#[instrument(
    skip_all,
    fields(correlation_id = %command.correlation_id(), player_id = %command.player_id)
)]
pub async fn handle_load_game(
    command: &LoadGame,
    sessions: &PlayerSessions,
    repo: &dyn SaveRepository,
) -> Result<Option<GameSnapshot>, DomainError> {
    validate_player_id(&command.player_id)?;
    info!(command_type = command.command_type(), "handling load_game command");

    let Some(record) = repo.load_latest(&command.player_id).await? else {
        return Ok(None);
    };

    let snapshot: GameSnapshot = serde_json::from_value(record.payload).map_err(|e| {
        DomainError::Infrastructure(format!(
            "saved game for {} is not a valid snapshot: {e}",
            command.player_id
        ))
    })?;

    let state = GameState::from(snapshot);
    let loaded = state.snapshot();
    sessions.replace(&command.player_id, state).await;

    Ok(Some(loaded))
}
