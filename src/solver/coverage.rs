//! Letter-coverage scoring
//!
//! Given the remaining candidates, counts for each letter how many candidate
//! words contain it anywhere. Guessing the most-covered letter eliminates the
//! largest share of candidates whichever way the checker answers.

use crate::core::{ALPHABET, GuessedSet, Word};

/// Count, per letter, the candidate words containing that letter
///
/// Word presence, not occurrence count: "speed" contributes 1 to 'e'.
/// Index 0 is 'a', index 25 is 'z'.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::solver::coverage::letter_coverage;
///
/// let words = [Word::new("cat").unwrap(), Word::new("car").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let counts = letter_coverage(&refs);
/// assert_eq!(counts[(b'c' - b'a') as usize], 2);
/// assert_eq!(counts[(b't' - b'a') as usize], 1);
/// ```
#[must_use]
pub fn letter_coverage(candidates: &[&Word]) -> [usize; 26] {
    let mut counts = [0usize; 26];

    for word in candidates {
        let mut mask = word.letter_mask();
        while mask != 0 {
            let index = mask.trailing_zeros() as usize;
            counts[index] += 1;
            mask &= mask - 1;
        }
    }

    counts
}

/// Pick the unguessed letter covering the most candidates
///
/// Returns the letter and its count, or `None` when every letter has been
/// guessed. Ties break to the alphabetically lowest letter: the alphabet is
/// walked in order and only a strictly greater count displaces the best.
#[must_use]
pub fn best_unguessed_letter(
    candidates: &[&Word],
    guessed: GuessedSet,
) -> Option<(u8, usize)> {
    let counts = letter_coverage(candidates);

    let mut best: Option<(u8, usize)> = None;
    for &letter in ALPHABET {
        if guessed.contains(letter) {
            continue;
        }
        let count = counts[(letter - b'a') as usize];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((letter, count));
        }
    }

    best
}
