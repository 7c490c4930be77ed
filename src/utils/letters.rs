use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Blank tile, playable as any letter for zero points
pub const WILDCARD: char = '*';

/// Standard English Scrabble letter values
pub static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['A', 'E', 'I', 'O', 'U', 'L', 'N', 'S', 'T', 'R'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['D', 'G'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['B', 'C', 'M', 'P'] {
        map.insert(ch, 3);
    }

    // 4 points
    for ch in ['F', 'H', 'V', 'W', 'Y'] {
        map.insert(ch, 4);
    }

    // 5 points
    map.insert('K', 5);

    // 8 points
    for ch in ['J', 'X'] {
        map.insert(ch, 8);
    }

    // 10 points
    for ch in ['Q', 'Z'] {
        map.insert(ch, 10);
    }

    map.insert(WILDCARD, 0);

    map
});

/// Tile counts for a full 100-tile bag
pub const TILE_FREQUENCIES: &[(char, usize)] = &[
    (WILDCARD, 2),
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Get the point value for a letter. Wildcards and unknown symbols score 0.
pub fn get_letter_value(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    LETTER_VALUES.get(&upper).copied().unwrap_or(0)
}

/// Sum of base letter values, ignoring board multipliers
pub fn base_word_value(word: &str) -> u32 {
    word.chars().map(get_letter_value).sum()
}

pub fn total_tiles(frequencies: &[(char, usize)]) -> usize {
    frequencies.iter().map(|(_, count)| count).sum()
}
