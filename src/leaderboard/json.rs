use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::{fs, sync::Mutex};

use super::{LeaderboardError, ScoreStore};
use crate::models::{GameScore, WordScore};

/// On-disk layout: `{ "word": [...], "game": [...] }`
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(default)]
    word: Vec<WordScore>,
    #[serde(default)]
    game: Vec<GameScore>,
}

/// Scores kept in a single JSON file, rewritten on every save
pub struct JsonScoreStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// A missing or unreadable file reads as no scores
    async fn read(&self) -> ScoreFile {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No score file at {}: {}", self.path.display(), e);
                return ScoreFile::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring malformed score file {}: {}", self.path.display(), e);
            ScoreFile::default()
        })
    }

    async fn write(&self, data: &ScoreFile) -> Result<(), LeaderboardError> {
        fs::write(&self.path, serde_json::to_string(data)?).await?;
        Ok(())
    }
}

fn top<T>(mut entries: Vec<T>, score: impl Fn(&T) -> i32, limit: usize) -> Vec<T> {
    entries.sort_by_key(|entry| std::cmp::Reverse(score(entry)));
    entries.truncate(limit);
    entries
}

#[async_trait::async_trait]
impl ScoreStore for JsonScoreStore {
    async fn save_word_score(&self, score: WordScore) -> Result<(), LeaderboardError> {
        let _guard = self.lock.lock().await;
        let mut data = self.read().await;
        data.word.push(score);
        self.write(&data).await
    }

    async fn save_game_score(&self, score: GameScore) -> Result<(), LeaderboardError> {
        let _guard = self.lock.lock().await;
        let mut data = self.read().await;
        data.game.push(score);
        self.write(&data).await
    }

    async fn top_word_scores(&self, limit: usize) -> Result<Vec<WordScore>, LeaderboardError> {
        let data = self.read().await;
        Ok(top(data.word, |entry| entry.score, limit))
    }

    async fn top_game_scores(&self, limit: usize) -> Result<Vec<GameScore>, LeaderboardError> {
        let data = self.read().await;
        Ok(top(data.game, |entry| entry.score, limit))
    }
}
