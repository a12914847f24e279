//! Commands for the Turn context.

use std::fmt;

use storyloom_core::command::Command;
use storyloom_game_state::domain::game_state::GameSnapshot;
use uuid::Uuid;

/// Player that turns without an explicit player id are attributed to.
pub const DEFAULT_PLAYER_ID: &str = "local";

/// Returns `player_id` when it is non-blank, otherwise [`DEFAULT_PLAYER_ID`].
#[must_use]
pub fn resolve_player_id(player_id: Option<&str>) -> String {
    player_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_PLAYER_ID)
        .to_owned()
}

/// Command to play one turn.
#[derive(Clone)]
pub struct TakeTurn {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player whose state the turn mutates.
    pub player_id: String,
    /// The player's free-text input.
    pub player_input: String,
    /// Narrator credential supplied with this turn.
    pub api_key: Option<String>,
    /// Game state as the client last saw it. Informational only.
    pub client_state: Option<serde_json::Value>,
}

impl fmt::Debug for TakeTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeTurn")
            .field("correlation_id", &self.correlation_id)
            .field("player_id", &self.player_id)
            .field("player_input", &self.player_input)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("client_state", &self.client_state)
            .finish()
    }
}

impl Command for TakeTurn {
    fn command_type(&self) -> &'static str {
        "turn.take_turn"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to save a player's game.
#[derive(Debug, Clone)]
pub struct SaveGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player the save belongs to.
    pub player_id: String,
    /// Snapshot to save. When absent the player's current state is saved.
    pub snapshot: Option<GameSnapshot>,
}

impl Command for SaveGame {
    fn command_type(&self) -> &'static str {
        "turn.save_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to load a player's most recent save into their session.
#[derive(Debug, Clone)]
pub struct LoadGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player whose save is loaded.
    pub player_id: String,
}

impl Command for LoadGame {
    fn command_type(&self) -> &'static str {
        "turn.load_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
