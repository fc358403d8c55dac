//! Candidate word dictionary
//!
//! A `Dictionary` is the immutable-at-load-time collection of candidate
//! words a game draws secrets and guesser candidates from. The default list
//! is compiled into the binary; alternate lists load from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{FilterStats, filter_word_list, load_from_file, words_from_slice};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// An immutable set of distinct lowercase words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
}

/// Error type for selections that match no word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    Empty,
    NoWordsOfLength(usize),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "The dictionary contains no words"),
            Self::NoWordsOfLength(n) => {
                write!(f, "The dictionary contains no word of length {n}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

impl Dictionary {
    /// Build a dictionary from words, dropping duplicates
    ///
    /// First occurrence wins; relative order is preserved.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();
        Self { words }
    }

    /// The dictionary bundled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// Load a dictionary from a line-delimited word-list file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(load_from_file(path)?))
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Lazily select the words of exactly the given length
    pub fn of_length(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == len)
    }

    /// Draw one word uniformly at random
    ///
    /// # Errors
    /// Returns `SelectionError::Empty` for an empty dictionary.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, SelectionError> {
        self.words.choose(rng).ok_or(SelectionError::Empty)
    }

    /// Draw one word of exactly the given length, uniformly at random
    ///
    /// # Errors
    /// Returns `SelectionError::NoWordsOfLength` if nothing matches.
    pub fn sample_of_length<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        len: usize,
    ) -> Result<&Word, SelectionError> {
        let matching: Vec<&Word> = self.of_length(len).collect();
        matching
            .choose(rng)
            .copied()
            .ok_or(SelectionError::NoWordsOfLength(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(entries: &[&str]) -> Dictionary {
        Dictionary::new(words_from_slice(entries))
    }

    #[test]
    fn new_deduplicates_preserving_order() {
        let dict = dictionary(&["cat", "dog", "cat", "bird", "dog"]);
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn embedded_is_nonempty_and_distinct() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert_eq!(dict.len(), WORDS_COUNT);
    }

    #[test]
    fn of_length_selects_exactly() {
        let dict = dictionary(&["cat", "car", "mouse", "ox"]);
        let three: Vec<&str> = dict.of_length(3).map(Word::text).collect();
        assert_eq!(three, vec!["cat", "car"]);
        assert_eq!(dict.of_length(7).count(), 0);
    }

    #[test]
    fn sample_draws_member() {
        let dict = dictionary(&["cat", "dog", "bird"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = dict.sample(&mut rng).unwrap();
            assert!(dict.words().contains(word));
        }
    }

    #[test]
    fn sample_empty_dictionary_fails() {
        let dict = dictionary(&[]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(dict.sample(&mut rng), Err(SelectionError::Empty));
    }

    #[test]
    fn sample_of_length_respects_constraint() {
        let dict = dictionary(&["cat", "mouse", "dog"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = dict.sample_of_length(&mut rng, 3).unwrap();
            assert_eq!(word.len(), 3);
        }
    }

    #[test]
    fn sample_of_length_fails_when_nothing_matches() {
        let dict = dictionary(&["cat", "dog"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            dict.sample_of_length(&mut rng, 9),
            Err(SelectionError::NoWordsOfLength(9))
        );
    }
}
