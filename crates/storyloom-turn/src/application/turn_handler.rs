//! Turn orchestration.
//!
//! One turn runs: validate input, invoke the narrator, parse its reply,
//! merge the patch, and build the response. Every narrator-side failure
//! (unavailable, call error, timeout, malformed reply) is replaced by the
//! same fallback reply, merged through the same path as a real one.

use std::sync::Arc;
use std::time::Duration;

use storyloom_core::command::Command;
use storyloom_core::error::DomainError;
use storyloom_game_state::domain::patch::apply_patch;
use storyloom_narrator::port::{Narrator, NarratorRequest};
use storyloom_narrator::reply::{NarratorReply, parse_reply};
use tracing::{debug, error, info, instrument, warn};

use crate::application::sessions::PlayerSessions;
use crate::domain::commands::TakeTurn;
use crate::domain::fallback::{FallbackCause, fallback_reply};
use crate::domain::turn_result::TurnResult;

/// Default deadline for one narrator call.
pub const DEFAULT_NARRATOR_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives turns against a narrator and the per-player session store.
pub struct TurnOrchestrator {
    narrator: Arc<dyn Narrator>,
    sessions: Arc<PlayerSessions>,
    narrator_timeout: Duration,
}

impl std::fmt::Debug for TurnOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnOrchestrator")
            .field("narrator_timeout", &self.narrator_timeout)
            .finish_non_exhaustive()
    }
}

impl TurnOrchestrator {
    /// Creates an orchestrator. `narrator_timeout` bounds each narrator call;
    /// expiry is treated like any other narrator failure.
    #[must_use]
    pub fn new(
        narrator: Arc<dyn Narrator>,
        sessions: Arc<PlayerSessions>,
        narrator_timeout: Duration,
    ) -> Self {
        Self {
            narrator,
            sessions,
            narrator_timeout,
        }
    }

    /// Plays one turn for `command.player_id`.
    ///
    /// The player's state is locked for the whole turn, so concurrent turns
    /// for the same player run one after another.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the player input is empty. No
    /// state is touched in that case. Narrator failures are not
    /// errors; they produce the fallback turn.
    #[instrument(
        skip_all,
        fields(correlation_id = %command.correlation_id(), player_id = %command.player_id)
    )]
    pub async fn take_turn(&self, command: &TakeTurn) -> Result<TurnResult, DomainError> {
        if command.player_input.is_empty() {
            return Err(DomainError::Validation("playerInput is required".to_owned()));
        }

        info!(command_type = command.command_type(), "handling take_turn command");
        if let Some(client_state) = &command.client_state {
            debug!(%client_state, "client-reported game state ignored");
        }

        let session = self.sessions.entry(&command.player_id);
        let mut state = session.lock().await;

        let request = NarratorRequest {
            player_input: command.player_input.clone(),
            state: state.snapshot(),
            api_key: command.api_key.clone(),
        };

        let reply = match self.invoke_narrator(&request).await {
            Ok(reply) => reply,
            Err(cause @ FallbackCause::Unavailable(_)) => {
                warn!(%cause, "falling back to offline turn");
                fallback_reply()
            }
            Err(cause) => {
                error!(%cause, "falling back to offline turn");
                fallback_reply()
            }
        };

        apply_patch(&mut state, &reply.to_patch());

        Ok(TurnResult::new(reply, &state))
    }

    async fn invoke_narrator(
        &self,
        request: &NarratorRequest,
    ) -> Result<NarratorReply, FallbackCause> {
        let raw = tokio::time::timeout(self.narrator_timeout, self.narrator.narrate(request))
            .await
            .map_err(|_| FallbackCause::TimedOut(self.narrator_timeout))??;

        parse_reply(&raw).map_err(|e| FallbackCause::MalformedReply(e.to_string()))
    }
}
