//! Routes for the Turn bounded context.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use storyloom_turn::domain::commands::{TakeTurn, resolve_player_id};
use storyloom_turn::domain::turn_result::TurnResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /turn.
///
/// Every field is optional at the JSON level so a missing `playerInput` is
/// reported as a validation error rather than a deserialization failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    /// The player's free-text input.
    #[serde(default)]
    pub player_input: String,
    /// The client's view of the game state. Informational only.
    #[serde(default)]
    pub game_state: Option<serde_json::Value>,
    /// Narrator credential for this turn.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Player the turn belongs to.
    #[serde(default)]
    pub player_id: Option<String>,
}

/// POST /turn
async fn take_turn(
    State(state): State<AppState>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResult>, ApiError> {
    let command = TakeTurn {
        correlation_id: Uuid::new_v4(),
        player_id: resolve_player_id(request.player_id.as_deref()),
        player_input: request.player_input,
        api_key: request.api_key,
        client_state: request.game_state,
    };

    info!(correlation_id = %command.correlation_id, "handling take_turn request");

    let result = state.orchestrator.take_turn(&command).await?;

    Ok(Json(result))
}

/// Returns the router for the turn context.
pub fn router() -> Router<AppState> {
    Router::new().route("/turn", post(take_turn))
}
