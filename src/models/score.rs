use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single word played, as recorded on the leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct WordScore {
    pub name: String,
    pub word: String,
    pub score: i32,
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

impl WordScore {
    pub fn new(name: impl Into<String>, word: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            word: word.into(),
            score,
            recorded_at: Utc::now(),
        }
    }
}

/// A player's total for a finished game
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct GameScore {
    pub name: String,
    pub score: i32,
    #[serde(default = "Utc::now")]
    pub recorded_at: DateTime<Utc>,
}

impl GameScore {
    pub fn new(name: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            score,
            recorded_at: Utc::now(),
        }
    }
}
