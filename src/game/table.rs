use rand::{rngs::StdRng, Rng};
use serde::Serialize;

use super::{
    rack::{Rack, RackError},
    session::{GameSession, SessionState},
    validator::WordValidator,
};
use crate::{
    dictionary::Dictionary,
    models::{Direction, GameScore, Grid, PlayOutcome, Position},
};

/// Tiles dealt to each rack
pub const TILE_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("The word {0} cannot be constructed.")]
    NotConstructible(String),
    #[error("The word {0} cannot be played at that location.")]
    CannotPlace(String),
    #[error(transparent)]
    Rack(#[from] RackError),
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub name: String,
    pub rack: Rack,
    pub score: u32,
}

/// A successful turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub player: String,
    pub word: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub phase: SessionState,
    pub grid: Grid,
    pub players: Vec<Player>,
    pub turn: usize,
    pub tiles_remaining: usize,
}

/// Players taking turns around one shared session
pub struct Table<R = StdRng> {
    session: GameSession<R>,
    players: Vec<Player>,
    turn: usize,
    tile_count: usize,
}

impl<R: Rng> Table<R> {
    /// Seat the players and deal each a full rack
    pub fn new(mut session: GameSession<R>, names: Vec<String>, tile_count: usize) -> Self {
        let players: Vec<Player> = session.batch(|session| {
            names
                .into_iter()
                .map(|name| {
                    let mut rack = Rack::new();
                    session.deal(&mut rack, tile_count);
                    Player {
                        name,
                        rack,
                        score: 0,
                    }
                })
                .collect()
        });

        Self {
            session,
            players,
            turn: 0,
            tile_count,
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Play `word` for the current player.
    ///
    /// The word must be in the dictionary and buildable from the player's
    /// rack. On success the spent tiles are replaced from the bag, the score
    /// is banked and the turn passes on. On failure nothing changes.
    pub fn play_turn(
        &mut self,
        word: &str,
        origin: Position,
        direction: Direction,
        dictionary: &Dictionary,
    ) -> Result<TurnRecord, TurnError> {
        let word = word.trim().to_uppercase();
        let Some(player) = self.players.get_mut(self.turn) else {
            return Err(TurnError::NotConstructible(word));
        };

        let tiles = player.rack.available_tiles();
        if word.is_empty() || !dictionary.is_valid(&word) {
            return Err(TurnError::NotConstructible(word));
        }
        let used = WordValidator::construct_word(&tiles, &word)
            .ok_or_else(|| TurnError::NotConstructible(word.clone()))?;

        let played: String = used.iter().collect();
        let score = self.session.batch(|session| -> Result<u32, TurnError> {
            let score = match session.play_at(&played, origin, direction) {
                PlayOutcome::Scored { score } => score,
                PlayOutcome::Rejected => return Err(TurnError::CannotPlace(word.clone())),
            };

            for tile in &used {
                player.rack.remove(*tile)?;
            }
            session.deal(&mut player.rack, used.len());
            Ok(score)
        })?;
        player.score += score;

        tracing::debug!("{} played {} for {} points", player.name, word, score);
        let record = TurnRecord {
            player: player.name.clone(),
            word,
            score,
        };

        self.turn = (self.turn + 1) % self.players.len();
        Ok(record)
    }

    /// New board and bag, fresh racks, first player to move. Scores carry over.
    pub fn reset(&mut self) {
        let players = &mut self.players;
        let tile_count = self.tile_count;
        self.session.batch(|session| {
            session.reset();
            for player in players.iter_mut() {
                player.rack.reset();
                session.deal(&mut player.rack, tile_count);
            }
        });
        self.turn = 0;
    }

    /// Highest-value words the current player could spell
    pub fn hint(&self, dictionary: &Dictionary) -> Vec<String> {
        self.current_player()
            .map(|player| dictionary.best_possible_words(&player.rack.available_tiles()))
            .unwrap_or_default()
    }

    /// Report every player's total and start their tallies over
    pub fn end(&mut self) -> Vec<GameScore> {
        self.players
            .iter_mut()
            .map(|player| {
                let total = std::mem::take(&mut player.score);
                GameScore::new(player.name.clone(), i32::try_from(total).unwrap_or(i32::MAX))
            })
            .collect()
    }

    pub fn view(&self) -> TableView {
        TableView {
            phase: self.session.state(),
            grid: self.session.board().snapshot(),
            players: self.players.clone(),
            turn: self.turn,
            tiles_remaining: self.session.bag().remaining(),
        }
    }
}

#[cfg(test)]
impl<R> Table<R> {
    pub(crate) fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }
}
