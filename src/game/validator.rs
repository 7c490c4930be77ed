use std::collections::BTreeMap;

use crate::utils::letters::WILDCARD;

/// Checks a word against the tiles a player holds
pub struct WordValidator;

impl WordValidator {
    /// Check if the rack can spell `word`, using wildcards for missing letters
    pub fn can_construct_word(tiles: &BTreeMap<char, usize>, word: &str) -> bool {
        Self::construct_word(tiles, word).is_some()
    }

    /// The tiles spent spelling `word`, in word order. A letter the rack lacks
    /// is covered by a wildcard, which shows up as `*` in the result.
    /// Returns None if the rack runs out.
    pub fn construct_word(tiles: &BTreeMap<char, usize>, word: &str) -> Option<Vec<char>> {
        let mut remaining = tiles.clone();
        let mut used = Vec::with_capacity(word.len());

        for letter in word.chars().map(|c| c.to_ascii_uppercase()) {
            let tile = if letter != WILDCARD && Self::take(&mut remaining, letter) {
                letter
            } else if Self::take(&mut remaining, WILDCARD) {
                WILDCARD
            } else {
                return None;
            };
            used.push(tile);
        }

        Some(used)
    }

    fn take(tiles: &mut BTreeMap<char, usize>, tile: char) -> bool {
        match tiles.get_mut(&tile) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
