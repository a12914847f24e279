//! Narrator port.

use std::fmt;

use async_trait::async_trait;
use storyloom_game_state::domain::game_state::GameSnapshot;
use thiserror::Error;

/// Input for one narrator call.
#[derive(Clone)]
pub struct NarratorRequest {
    /// The player's free-text input.
    pub player_input: String,
    /// Read-only copy of the player's state at call time.
    pub state: GameSnapshot,
    /// Credential supplied with the turn, overriding the configured one.
    pub api_key: Option<String>,
}

impl fmt::Debug for NarratorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarratorRequest")
            .field("player_input", &self.player_input)
            .field("state", &self.state)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Why a narrator call produced no text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NarratorError {
    /// No narrator is configured, or no credential could be resolved.
    #[error("narrator unavailable: {0}")]
    Unavailable(String),

    /// The call was attempted and failed.
    #[error("narrator call failed: {0}")]
    CallFailed(String),
}

/// Text-generation service producing the next story beat.
///
/// Implementations return the raw reply text; parsing it is the caller's
/// concern.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Generates the reply for one turn.
    async fn narrate(&self, request: &NarratorRequest) -> Result<String, NarratorError>;
}
