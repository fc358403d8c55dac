//! Game state and termination rules

use crate::core::{GuessedSet, Pattern, PatternError};

/// Maximum number of guesses before the guesser loses
///
/// Repeated letters count toward the limit; the game is lost once strictly
/// more guesses than this have been made without completing the word.
pub const GUESS_LIMIT: usize = 10;

/// Terminal result of a game, from the guesser's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Mutable state of one game in progress
///
/// Owned by the game loop; the pattern only changes through
/// [`GameState::apply_reveal`], which enforces reveal monotonicity.
#[derive(Debug, Clone)]
pub struct GameState {
    pattern: Pattern,
    guessed: GuessedSet,
    guesses_made: usize,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Start a game against a secret of the given length, nothing revealed
    #[must_use]
    pub fn new(secret_len: usize) -> Self {
        Self {
            pattern: Pattern::hidden(secret_len),
            guessed: GuessedSet::new(),
            guesses_made: 0,
            outcome: None,
        }
    }

    /// The current reveal state
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The distinct letters guessed so far
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> GuessedSet {
        self.guessed
    }

    /// Total guesses made, repeats included
    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    /// The terminal outcome, once reached
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the game has reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Record a proposed letter, returning true if it was not guessed before
    ///
    /// Every proposal counts toward the guess limit, fresh or repeated.
    pub fn record_guess(&mut self, letter: u8) -> bool {
        self.guesses_made += 1;
        self.guessed.insert(letter)
    }

    /// Replace the pattern with the checker's updated reveal
    ///
    /// # Errors
    /// Returns `PatternError` if the new pattern hides or changes an
    /// already-revealed slot, changes length, or reveals an unguessed letter.
    pub fn apply_reveal(&mut self, next: Pattern) -> Result<(), PatternError> {
        self.pattern.accept_update(&next, self.guessed)?;
        self.pattern = next;
        Ok(())
    }

    /// Evaluate termination, fixing the outcome if the game just ended
    ///
    /// `Won` when the pattern is complete; `Lost` when strictly more than
    /// [`GUESS_LIMIT`] guesses have been made without completing it. Once
    /// set, the outcome never changes.
    pub fn evaluate(&mut self) -> Option<Outcome> {
        if self.outcome.is_none() {
            if self.pattern.is_complete() {
                self.outcome = Some(Outcome::Won);
            } else if self.guesses_made > GUESS_LIMIT {
                self.outcome = Some(Outcome::Lost);
            }
        }
        self.outcome
    }

    /// Force a loss, e.g. when the guesser has no letters left to try
    pub fn force_loss(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(Outcome::Lost);
        }
    }
}
