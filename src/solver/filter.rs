//! Candidate narrowing
//!
//! A `CandidateSet` is a borrowed view over dictionary words still consistent
//! with the observed pattern and guessed letters. Narrowing always produces a
//! fresh set; the base dictionary is never mutated.

use crate::core::{GuessedSet, Pattern, Word};
use crate::dictionary::Dictionary;

/// Dictionary words consistent with the game state so far
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidateSet<'a> {
    /// Start from every dictionary word of the secret's length
    #[must_use]
    pub fn from_dictionary(dictionary: &'a Dictionary, secret_len: usize) -> Self {
        Self {
            words: dictionary.of_length(secret_len).collect(),
        }
    }

    /// Build a candidate set from an explicit word selection
    pub fn from_words(words: impl IntoIterator<Item = &'a Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Retain only the words the pattern admits
    ///
    /// Monotonic (the result is a subset of `self`) and idempotent
    /// (re-narrowing with the same pattern and guessed set changes nothing).
    #[must_use]
    pub fn narrow(&self, pattern: &Pattern, guessed: GuessedSet) -> Self {
        Self {
            words: self
                .words
                .iter()
                .copied()
                .filter(|word| pattern.admits(word, guessed))
                .collect(),
        }
    }

    /// Number of candidates remaining
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no candidate remains
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The remaining candidates
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    /// Membership check
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|w| *w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::words_from_slice;

    fn guessed(letters: &[u8]) -> GuessedSet {
        let mut set = GuessedSet::new();
        for &l in letters {
            set.insert(l);
        }
        set
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["cat", "car", "can", "dog"]))
    }

    #[test]
    fn from_dictionary_filters_by_length() {
        let dict = Dictionary::new(words_from_slice(&["cat", "mouse", "dog"]));
        let candidates = CandidateSet::from_dictionary(&dict, 3);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn narrow_keeps_consistent_words() {
        // Guess 'c', secret "cat": pattern becomes "c__"
        let dict = dictionary();
        let candidates = CandidateSet::from_dictionary(&dict, 3);

        let pattern = Pattern::parse("c__").unwrap();
        let narrowed = candidates.narrow(&pattern, guessed(&[b'c']));

        let texts: Vec<&str> = narrowed.words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["cat", "car", "can"]);
    }

    #[test]
    fn narrow_with_hit_at_shared_position_keeps_all() {
        // Guess 'a' after 'c': all of cat/car/can have 'a' at position 1
        let dict = dictionary();
        let candidates = CandidateSet::from_dictionary(&dict, 3)
            .narrow(&Pattern::parse("c__").unwrap(), guessed(&[b'c']));

        let narrowed =
            candidates.narrow(&Pattern::parse("ca_").unwrap(), guessed(&[b'c', b'a']));
        assert_eq!(narrowed.len(), 3);
    }

    #[test]
    fn narrow_with_miss_removes_words_containing_letter() {
        let dict = dictionary();
        let candidates = CandidateSet::from_dictionary(&dict, 3);

        // 't' guessed but not revealed anywhere: "cat" is out
        let narrowed = candidates.narrow(&Pattern::hidden(3), guessed(&[b't']));
        let texts: Vec<&str> = narrowed.words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["car", "can", "dog"]);
    }

    #[test]
    fn narrow_is_monotonic() {
        let dict = dictionary();
        let mut candidates = CandidateSet::from_dictionary(&dict, 3);

        let steps: &[(&str, &[u8])] = &[
            ("c__", &[b'c']),
            ("ca_", &[b'c', b'a']),
            ("ca_", &[b'c', b'a', b'x']),
        ];
        for (text, letters) in steps {
            let before = candidates.len();
            candidates = candidates.narrow(&Pattern::parse(text).unwrap(), guessed(letters));
            assert!(candidates.len() <= before);
        }
    }

    #[test]
    fn narrow_is_idempotent() {
        let dict = dictionary();
        let candidates = CandidateSet::from_dictionary(&dict, 3);

        let pattern = Pattern::parse("c__").unwrap();
        let set = guessed(&[b'c', b't']);

        let once = candidates.narrow(&pattern, set);
        let twice = once.narrow(&pattern, set);

        let first: Vec<&str> = once.words().iter().map(|w| w.text()).collect();
        let second: Vec<&str> = twice.words().iter().map(|w| w.text()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn narrow_never_drops_the_true_secret() {
        // The secret always survives narrowing under its own honest feedback
        let dict = dictionary();
        let secret = Word::new("cat").unwrap();

        let mut set = GuessedSet::new();
        let mut candidates = CandidateSet::from_dictionary(&dict, secret.len());

        for &letter in b"czaqt" {
            set.insert(letter);
            let pattern = Pattern::reveal(&secret, set);
            candidates = candidates.narrow(&pattern, set);
            assert!(candidates.contains(&secret));
        }
    }
}
