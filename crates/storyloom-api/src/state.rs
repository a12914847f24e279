//! Shared application state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use storyloom_core::clock::Clock;
use storyloom_core::repository::SaveRepository;
use storyloom_narrator::port::Narrator;
use storyloom_turn::application::sessions::PlayerSessions;
use storyloom_turn::application::turn_handler::TurnOrchestrator;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to timestamp saves.
    pub clock: Arc<dyn Clock>,
    /// Every active player's game state.
    pub sessions: Arc<PlayerSessions>,
    /// Turn orchestrator bound to `sessions`.
    pub orchestrator: Arc<TurnOrchestrator>,
    /// Save store.
    pub save_repository: Arc<dyn SaveRepository>,
}

impl AppState {
    /// Create new application state with an empty session store.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        narrator: Arc<dyn Narrator>,
        save_repository: Arc<dyn SaveRepository>,
        narrator_timeout: Duration,
    ) -> Self {
        let sessions = Arc::new(PlayerSessions::new());
        let orchestrator = Arc::new(TurnOrchestrator::new(
            narrator,
            Arc::clone(&sessions),
            narrator_timeout,
        ));
        Self {
            clock,
            sessions,
            orchestrator,
            save_repository,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions)
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}
