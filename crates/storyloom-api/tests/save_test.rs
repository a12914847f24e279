//! Integration tests for the save and load endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use storyloom_narrator::null::NullNarrator;
use storyloom_test_support::ScriptedNarrator;

#[tokio::test]
async fn test_save_then_load_round_trip() {
    // Arrange
    let app = common::build_test_app(Arc::new(NullNarrator)).await;
    let snapshot = json!({
        "hp": 3,
        "gold": 40,
        "items": [{ "name": "sword", "qty": 1 }, { "name": "potion", "qty": 2 }],
        "history": ["You enter a cave."]
    });

    // Act
    let (save_status, saved) = common::post_json(
        app.clone(),
        "/api/save",
        &json!({ "player_id": "p1", "game_state": snapshot }),
    )
    .await;
    let (load_status, loaded) = common::get_json(app, "/api/load?player_id=p1").await;

    // Assert
    assert_eq!(save_status, StatusCode::OK);
    assert_eq!(saved, json!({ "success": true }));
    assert_eq!(load_status, StatusCode::OK);
    assert_eq!(loaded["game_state"], snapshot);
}

#[tokio::test]
async fn test_load_replaces_in_memory_state_for_later_turns() {
    // Arrange
    let app = common::build_test_app(Arc::new(ScriptedNarrator::new(
        r#"{"narration":"Ouch.","delta_stats":{"hp":-1}}"#,
    )))
    .await;
    common::post_json(
        app.clone(),
        "/api/save",
        &json!({ "player_id": "p1", "game_state": { "hp": 2, "gold": 7 } }),
    )
    .await;
    common::post_json(
        app.clone(),
        "/api/turn",
        &json!({ "playerInput": "trip", "playerId": "p1" }),
    )
    .await;

    // Act
    common::get_json(app.clone(), "/api/load?player_id=p1").await;
    let (_, turn) = common::post_json(
        app,
        "/api/turn",
        &json!({ "playerInput": "trip again", "playerId": "p1" }),
    )
    .await;

    // Assert
    assert_eq!(turn["hp"], 1);
    assert_eq!(turn["gold"], 7);
}

#[tokio::test]
async fn test_save_without_game_state_saves_current_state() {
    // Arrange
    let app = common::build_test_app(Arc::new(ScriptedNarrator::new(
        r#"{"narration":"Loot!","delta_stats":{"gold":12},"items":[{"name":"gem","qty":1}]}"#,
    )))
    .await;
    common::post_json(
        app.clone(),
        "/api/turn",
        &json!({ "playerInput": "open chest", "playerId": "p1" }),
    )
    .await;

    // Act
    common::post_json(app.clone(), "/api/save", &json!({ "player_id": "p1" })).await;
    let (_, loaded) = common::get_json(app, "/api/load?player_id=p1").await;

    // Assert
    assert_eq!(
        loaded["game_state"],
        json!({
            "hp": 10,
            "gold": 12,
            "items": [{ "name": "gem", "qty": 1 }],
            "history": ["Loot!"]
        })
    );
}

#[tokio::test]
async fn test_load_unknown_player_returns_null() {
    let app = common::build_test_app(Arc::new(NullNarrator)).await;

    let (status, json) = common::get_json(app, "/api/load?player_id=ghost").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "game_state": null }));
}

#[tokio::test]
async fn test_save_with_blank_player_id_is_rejected() {
    let app = common::build_test_app(Arc::new(NullNarrator)).await;

    let (status, json) =
        common::post_json(app, "/api/save", &json!({ "player_id": "  " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}
