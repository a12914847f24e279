//! Routes for saving and loading games.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use storyloom_game_state::domain::game_state::GameSnapshot;
use storyloom_turn::application::save_handlers;
use storyloom_turn::domain::commands::{LoadGame, SaveGame};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /save.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    /// The player the save belongs to.
    #[serde(default)]
    pub player_id: String,
    /// Snapshot to save. When omitted the player's current state is saved.
    #[serde(default)]
    pub game_state: Option<GameSnapshot>,
}

/// Response body for POST /save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    /// Always true; failures are reported as error responses.
    pub success: bool,
}

/// Query string for GET /load.
#[derive(Debug, Deserialize)]
pub struct LoadQuery {
    /// The player whose latest save is loaded.
    #[serde(default)]
    pub player_id: String,
}

/// Response body for GET /load.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    /// The loaded state, or null when the player has no save.
    pub game_state: Option<GameSnapshot>,
}

/// POST /save
async fn save_game(
    State(state): State<AppState>,
    Json(request): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let command = SaveGame {
        correlation_id: Uuid::new_v4(),
        player_id: request.player_id,
        snapshot: request.game_state,
    };

    info!(correlation_id = %command.correlation_id, "handling save_game request");

    save_handlers::handle_save_game(
        &command,
        state.clock.as_ref(),
        &state.sessions,
        state.save_repository.as_ref(),
    )
    .await?;

    Ok(Json(SaveResponse { success: true }))
}

/// GET /load
async fn load_game(
    State(state): State<AppState>,
    Query(query): Query<LoadQuery>,
) -> Result<Json<LoadResponse>, ApiError> {
    let command = LoadGame {
        correlation_id: Uuid::new_v4(),
        player_id: query.player_id,
    };

    info!(correlation_id = %command.correlation_id, "handling load_game request");

    let game_state = save_handlers::handle_load_game(
        &command,
        &state.sessions,
        state.save_repository.as_ref(),
    )
    .await?;

    Ok(Json(LoadResponse { game_state }))
}

/// Returns the router for the save/load endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(save_game))
        .route("/load", get(load_game))
}
