use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{
    leaderboard::TOP_SCORES_LIMIT,
    models::{GameScore, WordScore},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct WordScoreRequest {
    pub name: String,
    pub word: String,
    pub score: i32,
}

#[derive(Debug, Deserialize)]
pub struct GameScoreRequest {
    pub name: String,
    pub score: i32,
}

/// Record a played word. Storage failures are logged, never surfaced.
pub async fn save_word_score(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WordScoreRequest>,
) -> (StatusCode, &'static str) {
    let record = WordScore::new(payload.name, payload.word, payload.score);
    if let Err(e) = state.scores.save_word_score(record).await {
        tracing::error!("Failed to save word score: {}", e);
    }
    (StatusCode::OK, "Success!")
}

/// Top 10 words by score
pub async fn highest_word_scores(State(state): State<Arc<AppState>>) -> Json<Vec<WordScore>> {
    match state.scores.top_word_scores(TOP_SCORES_LIMIT).await {
        Ok(scores) => Json(scores),
        Err(e) => {
            tracing::error!("Failed to load word scores: {}", e);
            Json(Vec::new())
        }
    }
}

/// Record a finished game's total. Storage failures are logged, never surfaced.
pub async fn save_game_score(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GameScoreRequest>,
) -> (StatusCode, &'static str) {
    let record = GameScore::new(payload.name, payload.score);
    if let Err(e) = state.scores.save_game_score(record).await {
        tracing::error!("Failed to save game score: {}", e);
    }
    (StatusCode::OK, "Success!")
}

/// Top 10 game totals
pub async fn highest_game_scores(State(state): State<Arc<AppState>>) -> Json<Vec<GameScore>> {
    match state.scores.top_game_scores(TOP_SCORES_LIMIT).await {
        Ok(scores) => Json(scores),
        Err(e) => {
            tracing::error!("Failed to load game scores: {}", e);
            Json(Vec::new())
        }
    }
}
