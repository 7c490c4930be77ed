use crate::{
    models::{Direction, Multiplier, Position, BOARD_SIZE},
    utils::letters::get_letter_value,
};

/// Bonus squares, one string per row from row 1.
/// `T` triple word, `D` double word, `t` triple letter, `d` double letter.
const LAYOUT: [&str; BOARD_SIZE] = [
    "T..d...T...d..T",
    ".D...t...t...D.",
    "..D...d.d...D..",
    "d..D...d...D..d",
    "....D.....D....",
    ".t...t...t...t.",
    "..d...d.d...d..",
    "T..d...D...d..T",
    "..d...d.d...d..",
    ".t...t...t...t.",
    "....D.....D....",
    "d..D...d...D..d",
    "..D...d.d...D..",
    ".D...t...t...D.",
    "T..d...T...d..T",
];

pub struct Scorer;

impl Scorer {
    /// The bonus square at a position, if any. Off-board positions have none.
    pub fn multiplier_at(pos: Position) -> Option<Multiplier> {
        if !pos.in_bounds() {
            return None;
        }

        match LAYOUT[pos.row - 1].as_bytes()[pos.col - 1] {
            b'T' => Some(Multiplier::TripleWord),
            b'D' => Some(Multiplier::DoubleWord),
            b't' => Some(Multiplier::TripleLetter),
            b'd' => Some(Multiplier::DoubleLetter),
            _ => None,
        }
    }

    pub fn multiplier_label(pos: Position) -> Option<&'static str> {
        Self::multiplier_at(pos).map(Multiplier::label)
    }

    /// Calculate the score for a word laid from `origin` in `direction`.
    ///
    /// Scoring rules:
    /// - Each letter has a base value, wildcards are worth 0
    /// - DL / TL multiply that letter's value by 2 / 3
    /// - DW / TW multiply the ENTIRE word; several word squares compound
    pub fn calculate_score(word: &str, origin: Position, direction: Direction) -> u32 {
        let mut letter_score_total = 0;
        let mut word_factor = 1;

        for (i, letter) in word.chars().enumerate() {
            let base_value = get_letter_value(letter);

            let letter_score = match Self::multiplier_at(origin.step(direction, i)) {
                Some(Multiplier::DoubleLetter) => base_value * 2,
                Some(Multiplier::TripleLetter) => base_value * 3,
                Some(Multiplier::DoubleWord) => {
                    word_factor *= 2;
                    base_value
                }
                Some(Multiplier::TripleWord) => {
                    word_factor *= 3;
                    base_value
                }
                None => base_value,
            };

            letter_score_total += letter_score;
        }

        letter_score_total * word_factor
    }
}
