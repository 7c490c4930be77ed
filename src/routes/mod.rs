pub mod games;
pub mod health;
pub mod scores;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(score_routes())
        .nest("/api", api_routes())
}

/// Leaderboard endpoints, at the paths the browser client already calls
fn score_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wordScore", post(scores::save_word_score))
        .route("/highestWordScores", get(scores::highest_word_scores))
        .route("/gameScore", post(scores::save_game_score))
        .route("/highestGameScores", get(scores::highest_game_scores))
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/board/multipliers", get(games::multipliers))
        .route("/games", post(games::create_game))
        .route("/games/{game_id}", get(games::get_game))
        .route("/games/{game_id}/play", post(games::play_word))
        .route("/games/{game_id}/reset", post(games::reset_game))
        .route("/games/{game_id}/hint", get(games::hint))
        .route("/games/{game_id}/end", post(games::end_game))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        dictionary::Dictionary,
        game::{rack::Rack, GameSession, Table, TILE_COUNT},
        leaderboard::JsonScoreStore,
        AppState,
    };
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use dashmap::DashMap;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state() -> (Arc<AppState>, std::path::PathBuf) {
        let scores_path =
            std::env::temp_dir().join(format!("route-scores-{}.json", uuid::Uuid::new_v4()));
        let config = Config::for_tests(&scores_path.to_string_lossy());
        let state = Arc::new(AppState {
            scores: Arc::new(JsonScoreStore::new(&scores_path)),
            config,
            dictionary: Dictionary::from_words(["cat", "dog"]),
            tables: DashMap::new(),
        });
        (state, scores_path)
    }

    fn test_app() -> (Router, std::path::PathBuf) {
        let (state, scores_path) = test_state();
        (create_routes().with_state(state), scores_path)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_word_score_round_trip_through_leaderboard() {
        let (app, path) = test_app();

        for (word, score) in [("CAT", 10), ("QUIZ", 44), ("DOG", 5)] {
            let (status, body) = send(
                &app,
                "POST",
                "/wordScore",
                Some(json!({ "name": "Ada", "word": word, "score": score })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "Success!");
        }

        let (status, body) = send(&app, "GET", "/highestWordScores", None).await;
        assert_eq!(status, StatusCode::OK);
        let words: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["word"].as_str().unwrap())
            .collect();
        assert_eq!(words, vec!["QUIZ", "CAT", "DOG"]);

        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn test_game_scores_empty_by_default() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/highestGameScores", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_and_fetch_game() {
        let (app, _) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/games",
            Some(json!({ "players": ["Ada", "Grace", "Alan"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["game"]["players"].as_array().unwrap().len(), 3);
        assert_eq!(body["game"]["tiles_remaining"], 100 - 3 * 7);

        let game_id = body["game_id"].as_str().unwrap().to_string();
        let (status, body) = send(&app, "GET", &format!("/api/games/{}", game_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["turn"], 0);
        assert_eq!(body["grid"].as_array().unwrap().len(), 15);
        assert_eq!(body["players"][0]["rack"]["tiles"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_default_players_from_config() {
        let (app, _) = test_app();
        let (_, body) = send(&app, "POST", "/api/games", Some(json!({}))).await;
        assert_eq!(body["game"]["players"][1]["name"], "Player 2");
    }

    #[tokio::test]
    async fn test_unknown_game_is_not_found() {
        let (app, _) = test_app();
        let uri = format!("/api/games/{}", uuid::Uuid::new_v4());
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "POST",
            &format!("{}/play", uri),
            Some(json!({ "word": "CAT", "row": 8, "col": 8, "direction": "horizontal" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unplayable_word_is_rejected() {
        let (app, _) = test_app();
        let (_, body) = send(&app, "POST", "/api/games", Some(json!({}))).await;
        let game_id = body["game_id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/games/{}/play", game_id),
            Some(json!({ "word": "ZZZZZZZZ", "row": 8, "col": 8, "direction": "vertical" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "The word ZZZZZZZZ cannot be constructed.");
    }

    #[tokio::test]
    async fn test_reset_hint_and_end() {
        let (app, path) = test_app();
        let (_, body) = send(&app, "POST", "/api/games", Some(json!({ "players": ["Ada"] }))).await;
        let game_id = body["game_id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "POST", &format!("/api/games/{}/reset", game_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tiles_remaining"], 93);

        let (status, body) = send(&app, "GET", &format!("/api/games/{}/hint", game_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["hint"].is_string());

        let (status, body) = send(&app, "POST", &format!("/api/games/{}/end", game_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Ada");
        assert_eq!(body[0]["score"], 0);

        let (_, body) = send(&app, "GET", "/highestGameScores", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn test_multiplier_grid() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/api/board/multipliers", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[7][7], "DW");
        assert_eq!(body[0][0], "TW");
        assert!(body[7][8].is_null());
    }

    #[tokio::test]
    async fn test_play_scores_word_and_records_it() {
        let (state, path) = test_state();
        let game_id = uuid::Uuid::new_v4();
        let mut table = Table::new(
            GameSession::seeded(5),
            vec!["Ada".to_string(), "Grace".to_string()],
            TILE_COUNT,
        );
        for (index, tiles) in [(0, "CATXYZQ"), (1, "DOGXYZQ")] {
            if let Some(player) = table.player_mut(index) {
                player.rack = Rack::from_tiles(tiles.chars().collect());
            }
        }
        state.tables.insert(game_id, table);
        let app = create_routes().with_state(state);
        let uri = format!("/api/games/{}/play", game_id);

        let (status, body) = send(
            &app,
            "POST",
            &uri,
            Some(json!({ "word": "cat", "row": 8, "col": 8, "direction": "horizontal" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["turn"], json!({ "player": "Ada", "word": "CAT", "score": 10 }));
        assert_eq!(body["game"]["phase"], "active");
        assert_eq!(body["game"]["turn"], 1);
        assert_eq!(body["game"]["tiles_remaining"], 100 - 2 * 7 - 3);
        assert_eq!(body["game"]["players"][0]["score"], 10);
        assert_eq!(body["game"]["grid"][7][7], "C");

        let (_, body) = send(&app, "GET", "/highestWordScores", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Ada");
        assert_eq!(body[0]["word"], "CAT");
        assert_eq!(body[0]["score"], 10);

        // Grace's DOG would run off the right edge
        let (status, body) = send(
            &app,
            "POST",
            &uri,
            Some(json!({ "word": "DOG", "row": 8, "col": 14, "direction": "horizontal" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "The word DOG cannot be played at that location.");

        let (_, body) = send(&app, "GET", "/highestWordScores", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let _ = tokio::fs::remove_file(path).await;
    }
}
