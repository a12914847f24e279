//! The response of one turn.

use serde::Serialize;
use storyloom_game_state::domain::game_state::{GameState, Item};
use storyloom_game_state::domain::patch::StatDelta;
use storyloom_narrator::reply::NarratorReply;

/// What a turn returns to the caller: the narrator's raw deltas and the
/// authoritative post-merge state. Callers should trust `hp`, `gold` and
/// `items` over the deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnResult {
    /// The story beat for this turn.
    pub narration: String,
    /// Choices offered to the player.
    pub options: Vec<String>,
    /// Raw stat change, absent keys reported as zero.
    pub delta_stats: StatDelta,
    /// Raw item deltas from the narrator.
    pub item_deltas: Vec<Item>,
    /// Full inventory after the merge.
    pub items: Vec<Item>,
    /// Hit points after the merge.
    pub hp: i64,
    /// Gold after the merge.
    pub gold: i64,
}

impl TurnResult {
    /// Combines the merged `reply` with the state it was merged into.
    #[must_use]
    pub fn new(reply: NarratorReply, state: &GameState) -> Self {
        Self {
            narration: reply.narration,
            options: reply.options,
            delta_stats: reply.delta_stats.resolved(),
            item_deltas: reply.items,
            items: state.items().to_vec(),
            hp: state.hp(),
            gold: state.gold(),
        }
    }
}
