use sqlx::{PgPool, Result};

use crate::models::{GameScore, WordScore};

// Word score queries
pub async fn insert_word_score(pool: &PgPool, score: &WordScore) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO word_scores (name, word, score, recorded_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(&score.name)
    .bind(&score.word)
    .bind(score.score)
    .bind(score.recorded_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn top_word_scores(pool: &PgPool, limit: i64) -> Result<Vec<WordScore>> {
    sqlx::query_as::<_, WordScore>(
        r#"
        SELECT name, word, score, recorded_at
        FROM word_scores
        ORDER BY score DESC, recorded_at
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

// Game score queries
pub async fn insert_game_score(pool: &PgPool, score: &GameScore) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO game_scores (name, score, recorded_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(&score.name)
    .bind(score.score)
    .bind(score.recorded_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn top_game_scores(pool: &PgPool, limit: i64) -> Result<Vec<GameScore>> {
    sqlx::query_as::<_, GameScore>(
        r#"
        SELECT name, score, recorded_at
        FROM game_scores
        ORDER BY score DESC, recorded_at
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
