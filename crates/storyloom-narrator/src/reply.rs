//! Structured narrator reply.

use serde::{Deserialize, Deserializer, Serialize};
use storyloom_game_state::domain::game_state::Item;
use storyloom_game_state::domain::patch::{StatDelta, StatePatch};
use thiserror::Error;

/// The reply schema the narrator is instructed to produce. Absent and
/// `null` fields both default to empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarratorReply {
    /// The next story beat.
    #[serde(deserialize_with = "null_as_default")]
    pub narration: String,
    /// Choices offered to the player.
    #[serde(deserialize_with = "null_as_default")]
    pub options: Vec<String>,
    /// Change to hit points and gold.
    #[serde(deserialize_with = "null_as_default")]
    pub delta_stats: StatDelta,
    /// Items gained (positive qty) or lost (negative qty).
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NarratorReply {
    /// The patch this reply applies to the player's state.
    #[must_use]
    pub fn to_patch(&self) -> StatePatch {
        StatePatch {
            stats: Some(self.delta_stats),
            items: self.items.clone(),
            narration: Some(self.narration.clone()),
        }
    }
}

/// The narrator's text is not a well-formed reply.
#[derive(Debug, Error)]
#[error("narrator reply is not valid structured data: {0}")]
pub struct ReplyParseError(#[from] serde_json::Error);

/// Parses raw narrator text into a reply. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `ReplyParseError` if the text is not a JSON object matching the
/// reply schema.
pub fn parse_reply(raw: &str) -> Result<NarratorReply, ReplyParseError> {
    Ok(serde_json::from_str(raw.trim())?)
}
