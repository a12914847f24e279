//! The per-player game state aggregate and its snapshot form.

use serde::{Deserialize, Serialize};

use super::patch::merge_items;

/// Hit points a freshly created player starts with.
pub const STARTING_HP: i64 = 10;

/// Gold a freshly created player starts with.
pub const STARTING_GOLD: i64 = 0;

/// A named stack of items in a player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name. Matching is exact and case-sensitive.
    pub name: String,
    /// Quantity held. May be zero or negative.
    #[serde(default)]
    pub qty: i64,
}

impl Item {
    /// Creates a new item entry.
    #[must_use]
    pub fn new(name: impl Into<String>, qty: i64) -> Self {
        Self {
            name: name.into(),
            qty,
        }
    }
}

/// Serialized copy of a `GameState`, suitable for persistence or
/// transmission. Missing fields take the fresh-state defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSnapshot {
    /// Hit points.
    pub hp: i64,
    /// Gold.
    pub gold: i64,
    /// Inventory in first-seen order.
    pub items: Vec<Item>,
    /// Narration history, oldest first.
    pub history: Vec<String>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            hp: STARTING_HP,
            gold: STARTING_GOLD,
            items: Vec::new(),
            history: Vec::new(),
        }
    }
}

/// The aggregate holding one player's hit points, gold, inventory and
/// narrative history.
///
/// Fields are only mutated through [`apply_patch`](super::patch::apply_patch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) hp: i64,
    pub(crate) gold: i64,
    pub(crate) items: Vec<Item>,
    pub(crate) history: Vec<String>,
}

impl GameState {
    /// Creates a fresh game state: 10 hp, no gold, no items, no history.
    #[must_use]
    pub fn new() -> Self {
        Self::from(GameSnapshot::default())
    }

    /// Current hit points.
    #[must_use]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    /// Current gold.
    #[must_use]
    pub fn gold(&self) -> i64 {
        self.gold
    }

    /// Inventory in first-seen order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Narration history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns a serializable copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            hp: self.hp,
            gold: self.gold,
            items: self.items.clone(),
            history: self.history.clone(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GameSnapshot> for GameState {
    /// Rebuilds a state from a snapshot. Items are folded through the same
    /// merge as a patch, so duplicate names collapse into one entry.
    fn from(snapshot: GameSnapshot) -> Self {
        let mut items = Vec::with_capacity(snapshot.items.len());
        merge_items(&mut items, &snapshot.items);
        Self {
            hp: snapshot.hp,
            gold: snapshot.gold,
            items,
            history: snapshot.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_starting_values() {
        // Act
        let state = GameState::new();

        // Assert
        assert_eq!(state.hp(), 10);
        assert_eq!(state.gold(), 0);
        assert!(state.items().is_empty());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_snapshot_missing_fields_take_fresh_defaults() {
        // Arrange
        let json = serde_json::json!({ "gold": 7 });

        // Act
        let snapshot: GameSnapshot = serde_json::from_value(json).unwrap();

        // Assert
        assert_eq!(snapshot.hp, STARTING_HP);
        assert_eq!(snapshot.gold, 7);
        assert!(snapshot.items.is_empty());
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn test_item_without_qty_defaults_to_zero() {
        let item: Item = serde_json::from_value(serde_json::json!({ "name": "rope" })).unwrap();

        assert_eq!(item, Item::new("rope", 0));
    }

    #[test]
    fn test_state_from_snapshot_preserves_fields() {
        // Arrange
        let snapshot = GameSnapshot {
            hp: -2,
            gold: 31,
            items: vec![Item::new("lantern", 1), Item::new("coin pouch", 0)],
            history: vec!["The door creaks.".to_owned()],
        };

        // Act
        let state = GameState::from(snapshot.clone());

        // Assert
        assert_eq!(state.snapshot(), snapshot);
    }

    #[test]
    fn test_state_from_snapshot_collapses_duplicate_item_names() {
        // Arrange
        let snapshot = GameSnapshot {
            items: vec![
                Item::new("arrow", 5),
                Item::new("bow", 1),
                Item::new("arrow", 3),
            ],
            ..GameSnapshot::default()
        };

        // Act
        let state = GameState::from(snapshot);

        // Assert
        assert_eq!(state.items(), &[Item::new("arrow", 8), Item::new("bow", 1)]);
    }
}
