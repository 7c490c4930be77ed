use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tokio::fs;
use anyhow::Result;

use crate::{
    game::WordValidator,
    utils::letters::{base_word_value, WILDCARD},
};

pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let dictionary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build from an in-memory word list, with the same normalization as `load`
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty() && word.len() >= 2)
            .collect();

        Self { words }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Like `contains`, but a `*` in `word` matches any single letter
    pub fn is_valid(&self, word: &str) -> bool {
        if !word.contains(WILDCARD) {
            return self.contains(word);
        }

        let pattern: Vec<char> = word.to_uppercase().chars().collect();
        self.words.iter().any(|candidate| {
            candidate.chars().count() == pattern.len()
                && candidate
                    .chars()
                    .zip(&pattern)
                    .all(|(c, p)| *p == WILDCARD || c == *p)
        })
    }

    /// Every word the given rack tiles can spell, sorted
    pub fn possible_words(&self, tiles: &BTreeMap<char, usize>) -> Vec<String> {
        let mut words: Vec<String> = self
            .words
            .iter()
            .filter(|word| WordValidator::can_construct_word(tiles, word))
            .cloned()
            .collect();
        words.sort();
        words
    }

    /// The possible words with the highest base score, for hints.
    /// Wildcard-covered letters count as zero.
    pub fn best_possible_words(&self, tiles: &BTreeMap<char, usize>) -> Vec<String> {
        let scored: Vec<(u32, String)> = self
            .possible_words(tiles)
            .into_iter()
            .filter_map(|word| {
                let used: String = WordValidator::construct_word(tiles, &word)?.into_iter().collect();
                Some((base_word_value(&used), word))
            })
            .collect();

        let Some(best) = scored.iter().map(|(score, _)| *score).max() else {
            return Vec::new();
        };

        scored
            .into_iter()
            .filter(|(score, _)| *score == best)
            .map(|(_, word)| word)
            .collect()
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
