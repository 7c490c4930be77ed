use std::{path::Path as FsPath, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    game::{
        GameSession, JsonSessionStore, MemorySessionStore, Scorer, SessionStore, Table, TableView,
        TurnRecord,
    },
    models::{Direction, GameScore, Position, WordScore, BOARD_SIZE},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub players: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub game_id: Uuid,
    pub game: TableView,
}

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub turn: TurnRecord,
    pub game: TableView,
}

fn session_store(state: &AppState, game_id: Uuid) -> Box<dyn SessionStore> {
    match &state.config.storage.session_dir {
        Some(dir) => Box::new(JsonSessionStore::new(
            FsPath::new(dir).join(format!("{}.json", game_id)),
        )),
        None => Box::new(MemorySessionStore::new()),
    }
}

/// Start a new game with the named players
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateGameRequest>,
) -> (StatusCode, Json<CreateGameResponse>) {
    let names = if payload.players.is_empty() {
        (1..=state.config.game.number_of_players)
            .map(|n| format!("Player {}", n))
            .collect()
    } else {
        payload.players
    };

    let game_id = Uuid::new_v4();
    let session = GameSession::new(session_store(&state, game_id), StdRng::from_os_rng());
    let table = Table::new(session, names, state.config.game.tile_count);
    let view = table.view();
    state.tables.insert(game_id, table);

    tracing::info!("Created game {} with {} players", game_id, view.players.len());
    (
        StatusCode::CREATED,
        Json(CreateGameResponse {
            game_id,
            game: view,
        }),
    )
}

pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<TableView>, StatusCode> {
    let table = state.tables.get(&game_id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(table.view()))
}

/// Play a word for whoever's turn it is, then log it to the word leaderboard
pub async fn play_word(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<PlayRequest>,
) -> Result<Json<PlayResponse>, (StatusCode, Json<Value>)> {
    let result = {
        let mut table = state.tables.get_mut(&game_id).ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Game {} not found", game_id) })),
            )
        })?;
        let origin = Position::new(payload.row, payload.col);
        table
            .play_turn(&payload.word, origin, payload.direction, &state.dictionary)
            .map(|turn| (turn, table.view()))
    };

    let (turn, game) = result.map_err(|e| {
        tracing::debug!("Rejected play in game {}: {}", game_id, e);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    let record = WordScore::new(
        turn.player.clone(),
        turn.word.clone(),
        i32::try_from(turn.score).unwrap_or(i32::MAX),
    );
    if let Err(e) = state.scores.save_word_score(record).await {
        tracing::error!("Failed to save word score: {}", e);
    }

    Ok(Json(PlayResponse { turn, game }))
}

pub async fn reset_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<TableView>, StatusCode> {
    let mut table = state.tables.get_mut(&game_id).ok_or(StatusCode::NOT_FOUND)?;
    table.reset();
    tracing::info!("Reset game {}", game_id);
    Ok(Json(table.view()))
}

/// One of the best words the current player could make
pub async fn hint(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<Value>, StatusCode> {
    let table = state.tables.get(&game_id).ok_or(StatusCode::NOT_FOUND)?;
    let words = table.hint(&state.dictionary);
    let hint = words
        .choose(&mut rand::rng())
        .cloned()
        .unwrap_or_else(|| "no words!".to_string());
    Ok(Json(json!({ "hint": hint })))
}

/// Close out the game: bank every player's total on the game leaderboard
pub async fn end_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<Vec<GameScore>>, StatusCode> {
    let scores = {
        let mut table = state.tables.get_mut(&game_id).ok_or(StatusCode::NOT_FOUND)?;
        table.end()
    };

    for score in &scores {
        if let Err(e) = state.scores.save_game_score(score.clone()).await {
            tracing::error!("Failed to save game score for {}: {}", score.name, e);
        }
    }

    tracing::info!("Ended game {}", game_id);
    Ok(Json(scores))
}

/// Bonus-square labels for every cell, row-major
pub async fn multipliers() -> Json<Vec<Vec<Option<&'static str>>>> {
    let grid = (1..=BOARD_SIZE)
        .map(|row| {
            (1..=BOARD_SIZE)
                .map(|col| Scorer::multiplier_label(Position::new(row, col)))
                .collect()
        })
        .collect();
    Json(grid)
}
