//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::coverage::best_unguessed_letter;
use super::filter::CandidateSet;
use super::partition::best_splitting_letter;
use crate::core::GuessedSet;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error type for letter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    /// The candidate set is empty: prior feedback contradicts the dictionary
    NoCandidates,
    /// All 26 letters have already been guessed
    AlphabetExhausted,
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => {
                write!(f, "No candidate word is consistent with the guesses so far")
            }
            Self::AlphabetExhausted => write!(f, "Every letter has already been guessed"),
        }
    }
}

impl std::error::Error for StrategyError {}

/// A strategy for selecting the next letter to guess
pub trait Strategy {
    /// Select the next letter given the remaining candidates and guesses
    ///
    /// # Errors
    /// Returns `StrategyError::AlphabetExhausted` when no letter remains, or
    /// `StrategyError::NoCandidates` when the strategy needs candidates and
    /// none survive.
    fn select_letter(
        &self,
        candidates: &CandidateSet<'_>,
        guessed: GuessedSet,
    ) -> Result<u8, StrategyError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyKind {
    /// Uniform draw from the unguessed letters
    Random(RandomStrategy),
    /// Maximum candidate coverage (default)
    Coverage(CoverageStrategy),
    /// Smallest worst-case partition
    Partition(PartitionStrategy),
}

impl Strategy for StrategyKind {
    fn select_letter(
        &self,
        candidates: &CandidateSet<'_>,
        guessed: GuessedSet,
    ) -> Result<u8, StrategyError> {
        match self {
            Self::Random(s) => s.select_letter(candidates, guessed),
            Self::Coverage(s) => s.select_letter(candidates, guessed),
            Self::Partition(s) => s.select_letter(candidates, guessed),
        }
    }
}

impl StrategyKind {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "coverage", "partition".
    /// Defaults to coverage if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "partition" => Self::Partition(PartitionStrategy),
            _ => Self::Coverage(CoverageStrategy),
        }
    }
}

/// Uniform draw from the alphabet minus the guessed set
///
/// Ignores the candidates entirely; the baseline the refined strategies are
/// measured against.
#[derive(Debug, Clone, Copy)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(
        &self,
        _candidates: &CandidateSet<'_>,
        guessed: GuessedSet,
    ) -> Result<u8, StrategyError> {
        let remaining: Vec<u8> = guessed.unguessed().collect();
        remaining
            .choose(&mut rand::rng())
            .copied()
            .ok_or(StrategyError::AlphabetExhausted)
    }
}

/// Maximum-coverage strategy
///
/// Guesses the letter appearing in the most remaining candidates, eliminating
/// the largest expected fraction whichever way the reveal goes. Ties break to
/// the alphabetically lowest letter for determinism.
#[derive(Debug, Clone, Copy)]
pub struct CoverageStrategy;

impl Strategy for CoverageStrategy {
    fn select_letter(
        &self,
        candidates: &CandidateSet<'_>,
        guessed: GuessedSet,
    ) -> Result<u8, StrategyError> {
        if candidates.is_empty() {
            return Err(StrategyError::NoCandidates);
        }

        best_unguessed_letter(candidates.words(), guessed)
            .map(|(letter, _)| letter)
            .ok_or(StrategyError::AlphabetExhausted)
    }
}

/// Worst-case-partition strategy
///
/// Guesses the letter whose largest feedback group is smallest, bounding the
/// adversary's best response. Costlier than coverage; the per-letter sweep
/// runs in parallel.
#[derive(Debug, Clone, Copy)]
pub struct PartitionStrategy;

impl Strategy for PartitionStrategy {
    fn select_letter(
        &self,
        candidates: &CandidateSet<'_>,
        guessed: GuessedSet,
    ) -> Result<u8, StrategyError> {
        if candidates.is_empty() {
            return Err(StrategyError::NoCandidates);
        }

        best_splitting_letter(candidates.words(), guessed)
            .map(|(letter, _)| letter)
            .ok_or(StrategyError::AlphabetExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ALPHABET, Word};
    use crate::dictionary::words_from_slice;

    fn candidates(words: &[Word]) -> CandidateSet<'_> {
        CandidateSet::from_words(words.iter())
    }

    fn exhausted() -> GuessedSet {
        let mut set = GuessedSet::new();
        for &l in ALPHABET {
            set.insert(l);
        }
        set
    }

    #[test]
    fn random_strategy_avoids_guessed_letters() {
        let words = words_from_slice(&["cat"]);
        let pool = candidates(&words);

        let mut guessed = GuessedSet::new();
        for &l in &ALPHABET[..20] {
            guessed.insert(l);
        }

        for _ in 0..50 {
            let letter = RandomStrategy.select_letter(&pool, guessed).unwrap();
            assert!(!guessed.contains(letter));
            assert!(letter.is_ascii_lowercase());
        }
    }

    #[test]
    fn random_strategy_exhausted_alphabet() {
        let words = words_from_slice(&["cat"]);
        let result = RandomStrategy.select_letter(&candidates(&words), exhausted());
        assert_eq!(result, Err(StrategyError::AlphabetExhausted));
    }

    #[test]
    fn random_strategy_ignores_empty_candidates() {
        let pool = CandidateSet::from_words([]);
        assert!(RandomStrategy.select_letter(&pool, GuessedSet::new()).is_ok());
    }

    #[test]
    fn coverage_strategy_picks_most_common_letter() {
        let words = words_from_slice(&["cat", "car", "can"]);
        let letter = CoverageStrategy
            .select_letter(&candidates(&words), GuessedSet::new())
            .unwrap();

        // c:3 a:3 -- alphabetic tie-break picks 'a'
        assert_eq!(letter, b'a');
    }

    #[test]
    fn coverage_strategy_empty_candidates() {
        let pool = CandidateSet::from_words([]);
        let result = CoverageStrategy.select_letter(&pool, GuessedSet::new());
        assert_eq!(result, Err(StrategyError::NoCandidates));
    }

    #[test]
    fn coverage_strategy_exhausted_alphabet() {
        let words = words_from_slice(&["cat"]);
        let result = CoverageStrategy.select_letter(&candidates(&words), exhausted());
        assert_eq!(result, Err(StrategyError::AlphabetExhausted));
    }

    #[test]
    fn partition_strategy_selects_unguessed_letter() {
        let words = words_from_slice(&["tab", "bat", "rat"]);
        let letter = PartitionStrategy
            .select_letter(&candidates(&words), GuessedSet::new())
            .unwrap();
        assert_eq!(letter, b'b');
    }

    #[test]
    fn partition_strategy_empty_candidates() {
        let pool = CandidateSet::from_words([]);
        let result = PartitionStrategy.select_letter(&pool, GuessedSet::new());
        assert_eq!(result, Err(StrategyError::NoCandidates));
    }

    #[test]
    fn kind_from_name() {
        assert!(matches!(
            StrategyKind::from_name("random"),
            StrategyKind::Random(_)
        ));
        assert!(matches!(
            StrategyKind::from_name("coverage"),
            StrategyKind::Coverage(_)
        ));
        assert!(matches!(
            StrategyKind::from_name("partition"),
            StrategyKind::Partition(_)
        ));
        // Unrecognized names fall back to the default
        assert!(matches!(
            StrategyKind::from_name("clever"),
            StrategyKind::Coverage(_)
        ));
    }

    #[test]
    fn kind_dispatches() {
        let words = words_from_slice(&["cat", "car", "can"]);
        let pool = candidates(&words);

        let letter = StrategyKind::from_name("coverage")
            .select_letter(&pool, GuessedSet::new())
            .unwrap();
        assert_eq!(letter, b'a');
    }
}
