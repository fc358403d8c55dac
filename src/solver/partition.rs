//! Worst-case partition scoring
//!
//! Guessing a letter splits the candidates into groups by the reveal they
//! would produce (which positions light up, with "none" for a miss). The
//! adversary's best response is the largest group; picking the letter whose
//! largest group is smallest bounds the remaining uncertainty.

use crate::core::{GuessedSet, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Worst-case candidates remaining after guessing `letter`
///
/// Groups the candidates by the positions at which `letter` appears (a
/// bitmask; zero means the letter misses) and returns the largest group size.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::partition::worst_case_remaining;
///
/// let words = [
///     Word::new("cat").unwrap(),
///     Word::new("car").unwrap(),
///     Word::new("dog").unwrap(),
/// ];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// // 'c' reveals position 0 for cat/car, misses for dog: worst case 2
/// assert_eq!(worst_case_remaining(b'c', &refs), 2);
/// ```
#[must_use]
pub fn worst_case_remaining(letter: u8, candidates: &[&Word]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    group_by_reveal(letter, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the reveal mask guessing `letter` would produce
fn group_by_reveal(letter: u8, candidates: &[&Word]) -> FxHashMap<u64, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let mut mask = 0u64;
        for (i, &l) in candidate.letters().iter().enumerate() {
            if l == letter {
                mask |= 1 << (i % 64);
            }
        }
        *counts.entry(mask).or_insert(0) += 1;
    }

    counts
}

/// Pick the unguessed letter minimizing the worst-case partition
///
/// Returns the letter and its worst-case count, or `None` when every letter
/// has been guessed. Ties break to the alphabetically lowest letter.
#[must_use]
pub fn best_splitting_letter(
    candidates: &[&Word],
    guessed: GuessedSet,
) -> Option<(u8, usize)> {
    let unguessed: Vec<u8> = guessed.unguessed().collect();

    unguessed
        .par_iter()
        .map(|&letter| (letter, worst_case_remaining(letter, candidates)))
        .min_by_key(|&(letter, worst)| (worst, letter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::words_from_slice;

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn worst_case_all_miss() {
        let words = words_from_slice(&["cat", "car", "can"]);
        // 'z' misses everywhere: one group holding everything
        assert_eq!(worst_case_remaining(b'z', &refs(&words)), 3);
    }

    #[test]
    fn worst_case_distinguishing_positions_split() {
        let words = words_from_slice(&["tab", "bat", "abs"]);
        // 't' at position 0 / position 2 / absent: three singleton groups
        assert_eq!(worst_case_remaining(b't', &refs(&words)), 1);
    }

    #[test]
    fn worst_case_same_position_does_not_split() {
        let words = words_from_slice(&["cat", "car", "can"]);
        // 'a' sits at position 1 in all three: one group of 3
        assert_eq!(worst_case_remaining(b'a', &refs(&words)), 3);
    }

    #[test]
    fn worst_case_empty_candidates() {
        assert_eq!(worst_case_remaining(b'a', &[]), 0);
    }

    #[test]
    fn group_by_reveal_distinguishes_duplicates() {
        let words = words_from_slice(&["see", "ese", "oak"]);
        let groups = group_by_reveal(b'e', &refs(&words));

        // see -> positions {1,2}, ese -> {0,2}, oak -> miss
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.values().sum::<usize>(), 3);
    }

    #[test]
    fn best_splitter_prefers_discriminating_letter() {
        let words = words_from_slice(&["tab", "bat", "rat"]);
        let (letter, worst) = best_splitting_letter(&refs(&words), GuessedSet::new()).unwrap();

        // 'b' yields three singleton groups (position 2 / position 0 / miss),
        // while 'a' never splits and 't' leaves a group of two
        assert_eq!(worst, 1);
        assert_eq!(letter, b'b');
    }

    #[test]
    fn best_splitter_skips_guessed_letters() {
        let words = words_from_slice(&["tab", "bat", "rat"]);
        let mut guessed = GuessedSet::new();
        guessed.insert(b'b');
        guessed.insert(b't');

        let (letter, _) = best_splitting_letter(&refs(&words), guessed).unwrap();
        assert_ne!(letter, b'b');
        assert_ne!(letter, b't');
    }

    #[test]
    fn best_splitter_none_when_alphabet_spent() {
        let words = words_from_slice(&["cat"]);
        let mut guessed = GuessedSet::new();
        for &l in crate::core::ALPHABET {
            guessed.insert(l);
        }

        assert!(best_splitting_letter(&refs(&words), guessed).is_none());
    }

    #[test]
    fn best_splitter_is_deterministic() {
        let words = words_from_slice(&["cat", "car", "can", "cup"]);
        let first = best_splitting_letter(&refs(&words), GuessedSet::new());
        let second = best_splitting_letter(&refs(&words), GuessedSet::new());
        assert_eq!(first, second);
    }
}
