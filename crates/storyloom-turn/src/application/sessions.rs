//! Per-player game state store.
//!
//! Each player's `GameState` sits behind its own async mutex, so turns for
//! one player are serialized while turns for different players proceed
//! independently. The map lock is only held to look up or insert an entry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use storyloom_game_state::domain::game_state::{GameSnapshot, GameState};
use tokio::sync::Mutex;

/// Shared handle to one player's state.
pub type PlayerState = Arc<Mutex<GameState>>;

/// In-memory store of every active player's `GameState`, keyed by player id.
#[derive(Debug, Default)]
pub struct PlayerSessions {
    players: RwLock<HashMap<String, PlayerState>>,
}

impl PlayerSessions {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state handle for `player_id`, creating a fresh state on
    /// first use.
    pub fn entry(&self, player_id: &str) -> PlayerState {
        if let Some(state) = self
            .players
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(player_id)
        {
            return Arc::clone(state);
        }

        let mut players = self
            .players
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            players
                .entry(player_id.to_owned())
                .or_insert_with(|| Arc::new(Mutex::new(GameState::new()))),
        )
    }

    /// Returns a copy of the player's current state.
    pub async fn snapshot(&self, player_id: &str) -> GameSnapshot {
        self.entry(player_id).lock().await.snapshot()
    }

    /// Replaces the player's state wholesale. Waits for any in-flight turn
    /// for that player to finish first.
    pub async fn replace(&self, player_id: &str, state: GameState) {
        *self.entry(player_id).lock().await = state;
    }
}
