use sqlx::PgPool;

use super::{LeaderboardError, ScoreStore};
use crate::{
    db::queries,
    models::{GameScore, WordScore},
};

/// Scores kept in the `word_scores` / `game_scores` tables
pub struct PgScoreStore {
    pool: PgPool,
}

impl PgScoreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait::async_trait]
impl ScoreStore for PgScoreStore {
    async fn save_word_score(&self, score: WordScore) -> Result<(), LeaderboardError> {
        queries::insert_word_score(&self.pool, &score).await?;
        Ok(())
    }

    async fn save_game_score(&self, score: GameScore) -> Result<(), LeaderboardError> {
        queries::insert_game_score(&self.pool, &score).await?;
        Ok(())
    }

    async fn top_word_scores(&self, limit: usize) -> Result<Vec<WordScore>, LeaderboardError> {
        Ok(queries::top_word_scores(&self.pool, sql_limit(limit)).await?)
    }

    async fn top_game_scores(&self, limit: usize) -> Result<Vec<GameScore>, LeaderboardError> {
        Ok(queries::top_game_scores(&self.pool, sql_limit(limit)).await?)
    }
}
