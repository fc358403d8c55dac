//! Reveal-state pattern for a secret word
//!
//! A pattern has one slot per letter of the secret; each slot is either a
//! revealed lowercase letter or hidden. The text form uses `'_'` for hidden
//! slots, e.g. `"c__"` for a three-letter secret with 'c' revealed.
//!
//! Invariants: the length is fixed at creation, and a revealed slot never
//! becomes hidden again.

use super::{GuessedSet, Word};
use std::fmt;

/// The text-form placeholder for a hidden slot
pub const PLACEHOLDER: char = '_';

/// Positional reveal state of a secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

/// Error type for malformed or inconsistent pattern input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    LengthMismatch { expected: usize, got: usize },
    InvalidSymbol(char),
    RevealedUnguessed(char),
    ConcealedSlot(usize),
    ChangedSlot(usize),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "Pattern must be {expected} characters, got {got}")
            }
            Self::InvalidSymbol(c) => {
                write!(f, "Pattern may only contain a-z and '_', got {c:?}")
            }
            Self::RevealedUnguessed(c) => {
                write!(f, "Pattern reveals {c:?}, which has not been guessed")
            }
            Self::ConcealedSlot(i) => {
                write!(f, "Pattern hides position {i}, which was already revealed")
            }
            Self::ChangedSlot(i) => {
                write!(f, "Pattern changes the letter at already-revealed position {i}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Create a fully hidden pattern of the given length
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Derive the pattern a checker shows for `secret` under `guessed`
    ///
    /// Every position whose letter is in the guessed set is revealed; all
    /// other positions are hidden.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{GuessedSet, Pattern, Word};
    ///
    /// let secret = Word::new("cat").unwrap();
    /// let mut guessed = GuessedSet::new();
    /// guessed.insert(b'c');
    /// guessed.insert(b't');
    ///
    /// let pattern = Pattern::reveal(&secret, guessed);
    /// assert_eq!(pattern.to_string(), "c_t");
    /// ```
    #[must_use]
    pub fn reveal(secret: &Word, guessed: GuessedSet) -> Self {
        let slots = secret
            .letters()
            .iter()
            .map(|&l| guessed.contains(l).then_some(l))
            .collect();
        Self { slots }
    }

    /// Parse a pattern from its text form (lowercase letters and `'_'`)
    ///
    /// # Errors
    /// Returns `PatternError::InvalidSymbol` for any other character.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut slots = Vec::with_capacity(text.len());
        for c in text.chars() {
            match c {
                PLACEHOLDER => slots.push(None),
                'a'..='z' => slots.push(Some(c as u8)),
                other => return Err(PatternError::InvalidSymbol(other)),
            }
        }
        Ok(Self { slots })
    }

    /// Number of slots (the secret word's length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot at a position: `Some(letter)` if revealed, `None` if hidden
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<u8> {
        self.slots[position]
    }

    /// True when no hidden slots remain
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of hidden slots
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Consistency predicate: could `word` be the secret behind this pattern?
    ///
    /// A word is admitted when:
    /// - its length equals the pattern length;
    /// - every revealed slot matches the word exactly;
    /// - no hidden slot holds a letter that has already been guessed (a
    ///   guessed letter that were present would have been revealed there).
    ///
    /// Pure; used both for candidate narrowing and for sanity-checking a
    /// typed pattern.
    #[must_use]
    pub fn admits(&self, word: &Word, guessed: GuessedSet) -> bool {
        if word.len() != self.len() {
            return false;
        }

        self.slots
            .iter()
            .zip(word.letters())
            .all(|(slot, &letter)| match slot {
                Some(revealed) => *revealed == letter,
                None => !guessed.contains(letter),
            })
    }

    /// Validate `next` as the successor of this pattern under `guessed`
    ///
    /// Enforces the reveal invariants a human checker must honor:
    /// - same length;
    /// - a revealed slot stays revealed with the same letter;
    /// - newly revealed letters must have been guessed.
    ///
    /// # Errors
    /// Returns the specific `PatternError` for the first violation found.
    pub fn accept_update(&self, next: &Self, guessed: GuessedSet) -> Result<(), PatternError> {
        if next.len() != self.len() {
            return Err(PatternError::LengthMismatch {
                expected: self.len(),
                got: next.len(),
            });
        }

        for (i, (prev, new)) in self.slots.iter().zip(&next.slots).enumerate() {
            match (prev, new) {
                (Some(a), Some(b)) if a != b => return Err(PatternError::ChangedSlot(i)),
                (Some(_), None) => return Err(PatternError::ConcealedSlot(i)),
                (None, Some(b)) if !guessed.contains(*b) => {
                    return Err(PatternError::RevealedUnguessed(*b as char));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(l) => write!(f, "{}", *l as char)?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
