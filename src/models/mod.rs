pub mod game;
pub mod score;

pub use game::{
    // Board geometry
    Cell, Direction, Grid, Multiplier, Position, BOARD_SIZE,
    // Placement result
    PlayOutcome,
};
pub use score::{GameScore, WordScore};
