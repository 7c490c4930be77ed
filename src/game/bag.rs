use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::letters::{total_tiles, TILE_FREQUENCIES};

/// The undrawn tile supply. Draws come off the end of the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileBag {
    tiles: Vec<char>,
}

impl TileBag {
    /// A shuffled bag holding exactly the tiles in `frequencies`
    pub fn new<R: Rng>(frequencies: &[(char, usize)], rng: &mut R) -> Self {
        let mut bag = Self::default();
        bag.initialize(frequencies, rng);
        bag
    }

    /// A shuffled 100-tile bag
    pub fn standard<R: Rng>(rng: &mut R) -> Self {
        Self::new(TILE_FREQUENCIES, rng)
    }

    /// Restore a bag from saved tiles, order preserved
    pub fn from_tiles(tiles: Vec<char>) -> Self {
        Self { tiles }
    }

    /// Replace the contents with a fresh shuffled expansion of `frequencies`
    pub fn initialize<R: Rng>(&mut self, frequencies: &[(char, usize)], rng: &mut R) {
        let mut tiles = Vec::with_capacity(total_tiles(frequencies));
        tiles.extend(
            frequencies
                .iter()
                .flat_map(|(tile, count)| std::iter::repeat(*tile).take(*count)),
        );
        self.tiles = tiles;
        Self::shuffle(&mut self.tiles, rng);
    }

    /// Fisher-Yates
    fn shuffle<R: Rng>(tiles: &mut [char], rng: &mut R) {
        for i in (1..tiles.len()).rev() {
            let j = rng.random_range(0..=i);
            tiles.swap(i, j);
        }
    }

    /// Remove and return up to `n` tiles. Asking for more than remain drains
    /// the bag; an empty bag yields an empty vec.
    pub fn draw(&mut self, n: usize) -> Vec<char> {
        if n >= self.tiles.len() {
            return std::mem::take(&mut self.tiles);
        }

        let split = self.tiles.len() - n;
        let mut drawn = self.tiles.split_off(split);
        drawn.reverse();
        drawn
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }
}
