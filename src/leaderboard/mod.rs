//! Word and game score storage for the top-10 boards.

mod json;
mod postgres;

pub use json::JsonScoreStore;
pub use postgres::PgScoreStore;

use crate::models::{GameScore, WordScore};

/// How many entries the top boards show
pub const TOP_SCORES_LIMIT: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only score log with top-N queries, highest score first
#[async_trait::async_trait]
pub trait ScoreStore: Send + Sync {
    async fn save_word_score(&self, score: WordScore) -> Result<(), LeaderboardError>;

    async fn save_game_score(&self, score: GameScore) -> Result<(), LeaderboardError>;

    async fn top_word_scores(&self, limit: usize) -> Result<Vec<WordScore>, LeaderboardError>;

    async fn top_game_scores(&self, limit: usize) -> Result<Vec<GameScore>, LeaderboardError>;
}
