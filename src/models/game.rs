use serde::{Deserialize, Serialize};

/// Side length of the square board
pub const BOARD_SIZE: usize = 15;

/// A board coordinate, 1-based: `1..=BOARD_SIZE` on both axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` tiles away from this one in the given direction
    pub fn step(self, direction: Direction, steps: usize) -> Self {
        match direction {
            Direction::Horizontal => Self {
                row: self.row,
                col: self.col.saturating_add(steps),
            },
            Direction::Vertical => Self {
                row: self.row.saturating_add(steps),
                col: self.col,
            },
        }
    }

    pub fn in_bounds(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.col)
    }
}

/// Which way a word runs from its origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Along the row, column increasing
    Horizontal,
    /// Down the column, row increasing
    Vertical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Multiplier {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "TL")]
    TripleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
    #[serde(rename = "TW")]
    TripleWord,
}

impl Multiplier {
    /// Short tag used by the client for bonus-square styling
    pub fn label(self) -> &'static str {
        match self {
            Multiplier::DoubleLetter => "DL",
            Multiplier::TripleLetter => "TL",
            Multiplier::DoubleWord => "DW",
            Multiplier::TripleWord => "TW",
        }
    }
}

/// A board square: a letter tile or nothing
pub type Cell = Option<char>;

/// Row-major occupancy grid. Index `[row - 1][col - 1]` for a 1-based position.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Result of a single placement attempt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlayOutcome {
    Scored { score: u32 },
    /// Out of bounds or overlapping an occupied square. Nothing was changed.
    Rejected,
}

impl PlayOutcome {
    /// Legacy encoding: the score, or -1 for a rejected placement
    pub fn as_sentinel(&self) -> i64 {
        match self {
            PlayOutcome::Scored { score } => i64::from(*score),
            PlayOutcome::Rejected => -1,
        }
    }
}
