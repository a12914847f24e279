//! The state-patch merge engine.
//!
//! A patch is purely additive: stat deltas are summed into the state, item
//! deltas are folded into the inventory by name, and a non-empty narration is
//! appended to the history. Applying a patch never fails.

use serde::{Deserialize, Serialize};

use super::game_state::{GameState, Item};

/// Change to hit points and gold. Absent keys count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    /// Hit point change.
    #[serde(default)]
    pub hp: Option<i64>,
    /// Gold change.
    #[serde(default)]
    pub gold: Option<i64>,
}

impl StatDelta {
    /// A delta that changes nothing, with both keys present.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a delta with both keys present.
    #[must_use]
    pub const fn new(hp: i64, gold: i64) -> Self {
        Self {
            hp: Some(hp),
            gold: Some(gold),
        }
    }

    /// Hit point change, zero when absent.
    #[must_use]
    pub fn hp_or_zero(&self) -> i64 {
        self.hp.unwrap_or(0)
    }

    /// Gold change, zero when absent.
    #[must_use]
    pub fn gold_or_zero(&self) -> i64 {
        self.gold.unwrap_or(0)
    }

    /// Returns the same delta with absent keys filled in as zero.
    #[must_use]
    pub fn resolved(self) -> Self {
        Self::new(self.hp_or_zero(), self.gold_or_zero())
    }
}

/// A stat delta, item deltas and narration merged into a `GameState` in one
/// step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    /// Stat change, if any.
    pub stats: Option<StatDelta>,
    /// Item deltas in arrival order.
    pub items: Vec<Item>,
    /// Narration to append. `None` and `Some("")` are both skipped.
    pub narration: Option<String>,
}

/// Merges `patch` into `state` and returns the same state.
///
/// Hit points and gold are not clamped; a negative hp is representable and
/// carries no special meaning here. Items are copied out of the patch, so
/// the patch can be reused or mutated afterwards.
pub fn apply_patch<'a>(state: &'a mut GameState, patch: &StatePatch) -> &'a mut GameState {
    if let Some(stats) = &patch.stats {
        state.hp = state.hp.saturating_add(stats.hp_or_zero());
        state.gold = state.gold.saturating_add(stats.gold_or_zero());
    }

    merge_items(&mut state.items, &patch.items);

    // Empty narration is indistinguishable from no narration.
    if let Some(narration) = patch.narration.as_deref().filter(|n| !n.is_empty()) {
        state.history.push(narration.to_owned());
    }

    state
}

/// Folds `incoming` into `existing`: a matching name accumulates `qty`, an
/// unseen name is appended as a copy. Entries are never removed.
pub(crate) fn merge_items(existing: &mut Vec<Item>, incoming: &[Item]) {
    for item in incoming {
        match existing.iter_mut().find(|entry| entry.name == item.name) {
            Some(entry) => entry.qty = entry.qty.saturating_add(item.qty),
            None => existing.push(item.clone()),
        }
    }
}
