use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bag::TileBag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RackError {
    #[error("tile '{0}' is not held in the rack")]
    TileNotHeld(char),
}

/// One player's hand of tiles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    tiles: Vec<char>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles(tiles: Vec<char>) -> Self {
        Self { tiles }
    }

    /// Pull up to `n` tiles from the bag. Returns how many were received,
    /// which is fewer than `n` once the bag runs low.
    pub fn draw(&mut self, n: usize, bag: &mut TileBag) -> usize {
        let drawn = bag.draw(n);
        let received = drawn.len();
        self.tiles.extend(drawn);
        received
    }

    /// Remove one instance of `tile`
    pub fn remove(&mut self, tile: char) -> Result<(), RackError> {
        let idx = self
            .tiles
            .iter()
            .position(|held| *held == tile)
            .ok_or(RackError::TileNotHeld(tile))?;
        self.tiles.swap_remove(idx);
        Ok(())
    }

    /// Tile counts keyed by symbol
    pub fn available_tiles(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        for tile in &self.tiles {
            *counts.entry(*tile).or_insert(0) += 1;
        }
        counts
    }

    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Empty the rack. Does not redraw.
    pub fn reset(&mut self) {
        self.tiles.clear();
    }
}
