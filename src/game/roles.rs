//! Player roles
//!
//! The Guesser proposes letters; the Checker holds the secret word and
//! reveals the pattern. Each role has a human and a computer variant,
//! injected into the game loop rather than baked in.

use super::console::Console;
use super::state::GameState;
use crate::core::{Pattern, PatternError, Word};
use crate::dictionary::{Dictionary, SelectionError};
use crate::solver::{CandidateSet, RandomStrategy, Strategy, StrategyError, StrategyKind};
use rand::Rng;
use std::fmt;
use std::io;

/// Error type for game flow
#[derive(Debug)]
pub enum GameError {
    /// A human participant typed the quit command
    Aborted,
    Strategy(StrategyError),
    Selection(SelectionError),
    Pattern(PatternError),
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted => write!(f, "Game aborted at user request"),
            Self::Strategy(e) => write!(f, "{e}"),
            Self::Selection(e) => write!(f, "{e}"),
            Self::Pattern(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Console error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Aborted => None,
            Self::Strategy(e) => Some(e),
            Self::Selection(e) => Some(e),
            Self::Pattern(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<StrategyError> for GameError {
    fn from(e: StrategyError) -> Self {
        Self::Strategy(e)
    }
}

impl From<SelectionError> for GameError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}

impl From<PatternError> for GameError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// The role proposing letters
pub trait Guesser {
    /// Produce the next letter to guess
    ///
    /// # Errors
    /// Returns `GameError::Aborted` on a human quit, or a strategy error
    /// when no letter can be produced.
    fn next_letter(
        &mut self,
        state: &GameState,
        console: &mut dyn Console,
    ) -> Result<u8, GameError>;
}

/// The role holding the secret word and revealing the pattern
pub trait Checker {
    /// Commit a secret and report its length
    ///
    /// A computer checker samples a word; a human checker only declares how
    /// long their (unspoken) word is.
    ///
    /// # Errors
    /// Returns `GameError::Aborted` on a human quit.
    fn secret_length(&mut self, console: &mut dyn Console) -> Result<usize, GameError>;

    /// Produce the pattern after the latest guess
    ///
    /// Every position of the secret matching any guessed letter must be
    /// revealed.
    ///
    /// # Errors
    /// Returns `GameError::Aborted` on a human quit.
    fn reveal(
        &mut self,
        state: &GameState,
        console: &mut dyn Console,
    ) -> Result<Pattern, GameError>;
}

/// Human guesser: prompts for a letter each turn
#[derive(Debug, Default)]
pub struct HumanGuesser;

impl Guesser for HumanGuesser {
    fn next_letter(
        &mut self,
        state: &GameState,
        console: &mut dyn Console,
    ) -> Result<u8, GameError> {
        console.say(&format!("you have guessed {}", state.guessed()));
        console.say(&format!("you see {}", state.pattern()));

        loop {
            let input = console.prompt("what letter would you like to guess?")?;
            let input = input.trim().to_lowercase();

            if input == "quit" {
                return Err(GameError::Aborted);
            }

            let bytes = input.as_bytes();
            if let [letter] = bytes
                && letter.is_ascii_lowercase()
            {
                return Ok(*letter);
            }
            console.say("enter a single letter a-z, or 'quit'");
        }
    }
}

/// Computer guesser: narrows dictionary candidates and applies a strategy
///
/// When the feedback contradicts every dictionary word (a human checker made
/// a mistake, or their secret is not in the dictionary), the prior is dropped
/// and the remaining turns fall back to random unguessed letters.
pub struct ComputerGuesser<'a> {
    strategy: StrategyKind,
    dictionary: &'a Dictionary,
    candidates: Option<CandidateSet<'a>>,
    blind: bool,
}

impl<'a> ComputerGuesser<'a> {
    /// Set up a guesser over the given dictionary
    ///
    /// Candidates are seeded from the secret's length on the first turn,
    /// once the checker has committed.
    #[must_use]
    pub const fn new(strategy: StrategyKind, dictionary: &'a Dictionary) -> Self {
        Self {
            strategy,
            dictionary,
            candidates: None,
            blind: false,
        }
    }

    /// Candidates still consistent with the feedback seen so far
    ///
    /// `None` before the first turn.
    #[must_use]
    pub fn candidates(&self) -> Option<&CandidateSet<'a>> {
        self.candidates.as_ref()
    }
}

impl Guesser for ComputerGuesser<'_> {
    fn next_letter(
        &mut self,
        state: &GameState,
        console: &mut dyn Console,
    ) -> Result<u8, GameError> {
        let candidates = self.candidates.get_or_insert_with(|| {
            CandidateSet::from_dictionary(self.dictionary, state.pattern().len())
        });
        *candidates = candidates.narrow(state.pattern(), state.guessed());

        match self.strategy.select_letter(candidates, state.guessed()) {
            Ok(letter) => Ok(letter),
            Err(StrategyError::NoCandidates) => {
                if !self.blind {
                    self.blind = true;
                    console.say("no dictionary word fits that feedback; guessing blind from here");
                }
                RandomStrategy
                    .select_letter(&CandidateSet::from_words([]), state.guessed())
                    .map_err(GameError::from)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Human checker: keeps the secret in their head, types the pattern each turn
#[derive(Debug, Default)]
pub struct HumanChecker;

impl Checker for HumanChecker {
    fn secret_length(&mut self, console: &mut dyn Console) -> Result<usize, GameError> {
        loop {
            let input = console.prompt("how many letters in your word?")?;
            let input = input.trim();

            if input.eq_ignore_ascii_case("quit") {
                return Err(GameError::Aborted);
            }

            match input.parse::<usize>() {
                Ok(n) if n > 0 => return Ok(n),
                _ => console.say("enter a positive number, or 'quit'"),
            }
        }
    }

    fn reveal(
        &mut self,
        state: &GameState,
        console: &mut dyn Console,
    ) -> Result<Pattern, GameError> {
        console.say(&format!("the computer guessed {}", state.guessed()));

        loop {
            let input = console.prompt("please type the appropriate hangman string")?;
            let input = input.trim();

            if input.eq_ignore_ascii_case("quit") {
                return Err(GameError::Aborted);
            }

            let checked = Pattern::parse(input).and_then(|next| {
                state
                    .pattern()
                    .accept_update(&next, state.guessed())
                    .map(|()| next)
            });
            match checked {
                Ok(next) => return Ok(next),
                Err(e) => console.say(&format!("invalid pattern: {e}")),
            }
        }
    }
}

/// Computer checker: owns a sampled secret and derives patterns mechanically
pub struct ComputerChecker {
    secret: Word,
}

impl ComputerChecker {
    /// Hold a specific secret word
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    /// Sample a secret from the dictionary, optionally of a fixed length
    ///
    /// # Errors
    /// Returns `SelectionError` if no dictionary word satisfies the request.
    pub fn sample<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        rng: &mut R,
        length: Option<usize>,
    ) -> Result<Self, SelectionError> {
        let secret = match length {
            Some(n) => dictionary.sample_of_length(rng, n)?,
            None => dictionary.sample(rng)?,
        };
        Ok(Self::new(secret.clone()))
    }

    /// The committed secret word
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

impl Checker for ComputerChecker {
    fn secret_length(&mut self, _console: &mut dyn Console) -> Result<usize, GameError> {
        Ok(self.secret.len())
    }

    fn reveal(
        &mut self,
        state: &GameState,
        _console: &mut dyn Console,
    ) -> Result<Pattern, GameError> {
        Ok(Pattern::reveal(&self.secret, state.guessed()))
    }
}
