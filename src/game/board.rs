use crate::models::{Cell, Direction, Grid, Position, BOARD_SIZE};

/// The 15x15 playing surface.
///
/// Positions are 1-based. Anything outside `1..=15` on either axis reads as
/// off-board, never as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Rebuild a board from a saved grid
    pub fn from_grid(cells: Grid) -> Self {
        Self { cells }
    }

    fn index(pos: Position) -> Option<(usize, usize)> {
        if !pos.in_bounds() {
            return None;
        }
        Some((pos.row - 1, pos.col - 1))
    }

    /// Get the cell at a position. Returns None if off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|(r, c)| self.cells[r][c])
    }

    /// True iff every square the word would cover is on the board and empty.
    /// An empty word is trivially placeable.
    pub fn is_placeable(&self, word: &str, origin: Position, direction: Direction) -> bool {
        word.chars()
            .enumerate()
            .all(|(i, _)| self.get(origin.step(direction, i)) == Some(None))
    }

    /// Write each letter into its square, in order.
    ///
    /// Does not re-check placeability: occupied squares are overwritten.
    /// Letters that would land off the board are dropped.
    pub fn place(&mut self, word: &str, origin: Position, direction: Direction) {
        for (i, letter) in word.chars().enumerate() {
            if let Some((r, c)) = Self::index(origin.step(direction, i)) {
                self.cells[r][c] = Some(letter);
            }
        }
    }

    /// Copy of the occupancy grid for rendering
    pub fn snapshot(&self) -> Grid {
        self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}
