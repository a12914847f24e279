//! Prompts sent to the narrator model.

use crate::port::NarratorRequest;

/// Language the narrator writes in unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "Traditional Chinese";

/// Instructions describing the narrator's role, its reply language and the
/// reply schema.
#[must_use]
pub fn system_prompt(language: &str) -> String {
    format!(
        "You are the narrator of a role-playing game. Respond in {language}. \
Based on the player's input and the current game state, write the next passage of the story, \
offer two options the player can choose from, the change to the character's stats (delta_stats), \
and the list of items gained or lost (items). \
Reply with JSON only, formatted exactly as: \
{{\"narration\":\"text\", \"options\":[\"option 1\",\"option 2\"], \
\"delta_stats\":{{\"hp\":integer,\"gold\":integer}}, \
\"items\":[{{\"name\":\"item name\",\"qty\":quantity}}]}}"
    )
}

/// Builds the user message for one turn.
///
/// # Errors
///
/// Returns the serializer's error if the game state cannot be rendered as
/// JSON.
pub fn user_prompt(request: &NarratorRequest) -> Result<String, serde_json::Error> {
    let state = serde_json::to_string(&request.state)?;
    Ok(format!(
        "Player input: {}\nGame state: {state}",
        request.player_input
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyloom_game_state::domain::game_state::{GameSnapshot, Item};

    #[test]
    fn test_user_prompt_carries_input_and_state() {
        // Arrange
        let request = NarratorRequest {
            player_input: "open the chest".to_owned(),
            state: GameSnapshot {
                items: vec![Item::new("key", 1)],
                ..GameSnapshot::default()
            },
            api_key: None,
        };

        // Act
        let prompt = user_prompt(&request).unwrap();

        // Assert
        assert_eq!(
            prompt,
            "Player input: open the chest\nGame state: \
             {\"hp\":10,\"gold\":0,\"items\":[{\"name\":\"key\",\"qty\":1}],\"history\":[]}"
        );
    }

    #[test]
    fn test_system_prompt_names_language_and_schema() {
        let prompt = system_prompt("Japanese");

        assert!(prompt.contains("Respond in Japanese."));
        assert!(prompt.contains(
            r#""delta_stats":{"hp":integer,"gold":integer}, "items":[{"name":"item name","qty":quantity}]}"#
        ));
    }
}
