//! Integration tests for the turn endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use storyloom_narrator::null::NullNarrator;
use storyloom_narrator::port::Narrator;
use storyloom_test_support::{FailingNarrator, ScriptedNarrator};
use storyloom_turn::domain::fallback::FALLBACK_NARRATION;

const CAVE_REPLY: &str = r#"{
    "narration": "You enter a cave.",
    "options": ["Light a torch", "Turn back"],
    "delta_stats": {"hp": -3, "gold": 5},
    "items": [{"name": "torch", "qty": 1}]
}"#;

#[tokio::test]
async fn test_turns_accumulate_into_authoritative_state() {
    // Arrange
    let app = common::build_test_app(Arc::new(ScriptedNarrator::new(CAVE_REPLY))).await;

    // Act
    let (_, first) =
        common::post_json(app.clone(), "/api/turn", &json!({ "playerInput": "go in" })).await;
    let (status, second) =
        common::post_json(app, "/api/turn", &json!({ "playerInput": "go deeper" })).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["hp"], 7);
    assert_eq!(second["hp"], 4);
    assert_eq!(second["gold"], 10);
    assert_eq!(second["delta_stats"], json!({ "hp": -3, "gold": 5 }));
    assert_eq!(second["item_deltas"], json!([{ "name": "torch", "qty": 1 }]));
    assert_eq!(second["items"], json!([{ "name": "torch", "qty": 2 }]));
    assert_eq!(second["options"], json!(["Light a torch", "Turn back"]));
}

#[tokio::test]
async fn test_players_are_keyed_by_player_id() {
    // Arrange
    let app = common::build_test_app(Arc::new(ScriptedNarrator::new(CAVE_REPLY))).await;

    // Act
    common::post_json(
        app.clone(),
        "/api/turn",
        &json!({ "playerInput": "go in", "playerId": "alice" }),
    )
    .await;
    let (_, bob) = common::post_json(
        app.clone(),
        "/api/turn",
        &json!({ "playerInput": "go in", "playerId": "bob" }),
    )
    .await;
    let (_, anonymous) =
        common::post_json(app, "/api/turn", &json!({ "playerInput": "go in" })).await;

    // Assert
    assert_eq!(bob["hp"], 7);
    assert_eq!(anonymous["hp"], 7);
}

#[tokio::test]
async fn test_client_game_state_is_not_merged() {
    // Arrange
    let app = common::build_test_app(Arc::new(NullNarrator)).await;

    // Act
    let (status, json) = common::post_json(
        app,
        "/api/turn",
        &json!({
            "playerInput": "look",
            "gameState": { "hp": 999, "gold": 999, "items": [{ "name": "crown", "qty": 1 }] }
        }),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hp"], 10);
    assert_eq!(json["gold"], 0);
    assert_eq!(json["items"], json!([]));
}

#[tokio::test]
async fn test_empty_player_input_is_rejected() {
    // Arrange
    let app = common::build_test_app(Arc::new(ScriptedNarrator::new(CAVE_REPLY))).await;

    // Act
    let (status, json) =
        common::post_json(app.clone(), "/api/turn", &json!({ "playerInput": "" })).await;
    let (_, after) = common::post_json(app, "/api/turn", &json!({ "playerInput": "go in" })).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
    assert_eq!(after["hp"], 7);
}

#[tokio::test]
async fn test_all_narrator_failures_produce_identical_fallback_responses() {
    // Arrange
    let narrators: Vec<Arc<dyn Narrator>> = vec![
        Arc::new(NullNarrator),
        Arc::new(FailingNarrator),
        Arc::new(ScriptedNarrator::new("{\"narration\": unterminated")),
    ];

    let mut responses = Vec::new();
    for narrator in narrators {
        let app = common::build_test_app(narrator).await;

        // Act
        let (status, json) =
            common::post_json(app, "/api/turn", &json!({ "playerInput": "hello" })).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        responses.push(json);
    }

    assert_eq!(
        responses[0],
        json!({
            "narration": FALLBACK_NARRATION,
            "options": [],
            "delta_stats": { "hp": 0, "gold": 0 },
            "item_deltas": [],
            "items": [],
            "hp": 10,
            "gold": 0
        })
    );
    assert!(responses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_whitespace_player_input_is_a_turn() {
    // Arrange
    let app = common::build_test_app(Arc::new(ScriptedNarrator::new(CAVE_REPLY))).await;

    // Act
    let (status, json) =
        common::post_json(app, "/api/turn", &json!({ "playerInput": "   " })).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hp"], 7);
}
