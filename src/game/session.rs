use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use super::{
    bag::TileBag,
    board::Board,
    persist::{MemorySessionStore, SessionSnapshot, SessionStore},
    rack::Rack,
    scorer::Scorer,
};
use crate::models::{Direction, PlayOutcome, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Fresh board, full bag
    Reset,
    /// At least one word on the board
    Active,
}

/// One game's board and bag.
///
/// Loads from its store when constructed and saves after every mutation,
/// or once at the end of a [`GameSession::batch`]. Save failures are logged
/// and otherwise ignored so a turn is never lost to storage trouble.
pub struct GameSession<R = StdRng> {
    board: Board,
    bag: TileBag,
    rng: R,
    store: Box<dyn SessionStore>,
    batching: bool,
    dirty: bool,
}

impl GameSession<StdRng> {
    /// In-memory session with a reproducible bag
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            Box::new(MemorySessionStore::new()),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(store: Box<dyn SessionStore>, rng: R) -> Self {
        let mut session = Self {
            board: Board::new(),
            bag: TileBag::default(),
            rng,
            store,
            batching: false,
            dirty: false,
        };

        match session.store.load() {
            Ok(Some(snapshot)) => {
                tracing::debug!("Restored session with {} tiles in bag", snapshot.bag.len());
                session.board = Board::from_grid(snapshot.grid);
                session.bag = TileBag::from_tiles(snapshot.bag);
            }
            Ok(None) => session.reset(),
            Err(e) => {
                tracing::warn!("Failed to load saved session: {}. Starting a new game.", e);
                session.reset();
            }
        }

        session
    }

    /// Fresh empty board and a newly shuffled full bag
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.bag = TileBag::standard(&mut self.rng);
        self.save();
    }

    /// Place `word` if every square it needs is on the board and free,
    /// then score it. A rejected play changes nothing.
    pub fn play_at(&mut self, word: &str, origin: Position, direction: Direction) -> PlayOutcome {
        if !self.board.is_placeable(word, origin, direction) {
            return PlayOutcome::Rejected;
        }

        self.board.place(word, origin, direction);
        self.save();

        PlayOutcome::Scored {
            score: Scorer::calculate_score(word, origin, direction),
        }
    }

    /// Take up to `n` tiles straight from the bag
    pub fn take_from_bag(&mut self, n: usize) -> Vec<char> {
        let drawn = self.bag.draw(n);
        self.save();
        drawn
    }

    /// Top a rack up by `n` tiles from this session's bag
    pub fn deal(&mut self, rack: &mut Rack, n: usize) -> usize {
        let received = rack.draw(n, &mut self.bag);
        self.save();
        received
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn state(&self) -> SessionState {
        if self.board.is_empty() {
            SessionState::Reset
        } else {
            SessionState::Active
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.board.snapshot(),
            bag: self.bag.tiles().to_vec(),
        }
    }

    /// Run several mutations and save once at the end, if anything changed
    pub fn batch<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let outer = std::mem::replace(&mut self.batching, true);
        let result = f(self);
        self.batching = outer;

        if !outer && std::mem::take(&mut self.dirty) {
            self.save();
        }
        result
    }

    fn save(&mut self) {
        if self.batching {
            self.dirty = true;
            return;
        }

        if let Err(e) = self.store.save(&self.snapshot()) {
            tracing::warn!("Failed to save session: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::persist::{CountingStore, StoreError};

    struct FailingStore;

    impl SessionStore for FailingStore {
        fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("load failed")))
        }

        fn save(&self, _snapshot: &SessionSnapshot) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("save failed")))
        }
    }

    #[test]
    fn test_new_session_is_reset() {
        let session = GameSession::seeded(1);
        assert_eq!(session.state(), SessionState::Reset);
        assert!(session.board().is_empty());
        assert_eq!(session.bag().remaining(), 100);
    }

    #[test]
    fn test_play_cat_at_center() {
        let mut session = GameSession::seeded(1);
        let outcome = session.play_at("CAT", Position::new(8, 8), Direction::Horizontal);

        assert_eq!(outcome, PlayOutcome::Scored { score: 10 });
        assert_eq!(session.state(), SessionState::Active);
        let grid = session.board().snapshot();
        assert_eq!(grid[7][7..10], [Some('C'), Some('A'), Some('T')]);
    }

    #[test]
    fn test_overlapping_play_is_rejected_without_mutation() {
        let mut session = GameSession::seeded(1);
        session.play_at("CAT", Position::new(8, 8), Direction::Horizontal);
        let before = session.snapshot();

        let outcome = session.play_at("CAT", Position::new(8, 8), Direction::Horizontal);
        assert_eq!(outcome, PlayOutcome::Rejected);
        assert_eq!(outcome.as_sentinel(), -1);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_out_of_bounds_play_is_rejected() {
        let mut session = GameSession::seeded(1);
        let outcome = session.play_at("MELODY", Position::new(1, 11), Direction::Horizontal);
        assert_eq!(outcome, PlayOutcome::Rejected);
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_reset_clears_board_and_refills_bag() {
        let mut session = GameSession::seeded(9);
        session.play_at("CAT", Position::new(8, 8), Direction::Vertical);
        session.take_from_bag(30);

        session.reset();
        assert_eq!(session.state(), SessionState::Reset);
        assert_eq!(session.bag().remaining(), 100);

        // idempotent
        session.reset();
        assert_eq!(session.state(), SessionState::Reset);
        assert_eq!(session.bag().remaining(), 100);
    }

    #[test]
    fn test_deal_draws_from_session_bag() {
        let mut session = GameSession::seeded(4);
        let mut rack = Rack::new();

        assert_eq!(session.deal(&mut rack, 7), 7);
        assert_eq!(rack.len(), 7);
        assert_eq!(session.bag().remaining(), 93);
    }

    #[test]
    fn test_session_restores_from_store() {
        let store = MemorySessionStore::new();
        {
            let mut session = GameSession::new(Box::new(store.clone()), StdRng::seed_from_u64(2));
            session.play_at("CAT", Position::new(8, 8), Direction::Horizontal);
            session.take_from_bag(10);
        }

        let restored = GameSession::new(Box::new(store), StdRng::seed_from_u64(99));
        assert_eq!(restored.bag().remaining(), 90);
        assert_eq!(
            restored.board().get(Position::new(8, 10)),
            Some(Some('T'))
        );
    }

    #[test]
    fn test_store_failures_do_not_abort_play() {
        let mut session = GameSession::new(Box::new(FailingStore), StdRng::seed_from_u64(5));
        assert_eq!(session.bag().remaining(), 100);

        let outcome = session.play_at("CAT", Position::new(8, 8), Direction::Horizontal);
        assert_eq!(outcome, PlayOutcome::Scored { score: 10 });
    }

    #[test]
    fn test_batch_saves_once() {
        let store = CountingStore::default();
        let mut session = GameSession::new(Box::new(store.clone()), StdRng::seed_from_u64(3));
        assert_eq!(store.count(), 1);

        let mut racks = vec![Rack::new(), Rack::new(), Rack::new()];
        session.batch(|session| {
            session.reset();
            for rack in &mut racks {
                session.deal(rack, 7);
            }
            // nested batches defer to the outermost one
            session.batch(|session| session.take_from_bag(2));
        });

        assert_eq!(store.count(), 2);
        assert_eq!(session.bag().remaining(), 100 - 3 * 7 - 2);
    }

    #[test]
    fn test_batch_without_changes_does_not_save() {
        let store = CountingStore::default();
        let mut session = GameSession::new(Box::new(store.clone()), StdRng::seed_from_u64(3));
        session.play_at("CAT", Position::new(8, 8), Direction::Horizontal);
        assert_eq!(store.count(), 2);

        let outcome = session.batch(|session| {
            session.play_at("CAT", Position::new(8, 8), Direction::Horizontal)
        });
        assert_eq!(outcome, PlayOutcome::Rejected);
        assert_eq!(store.count(), 2);
    }
}
