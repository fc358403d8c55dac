//! The game loop
//!
//! Alternates guesser and checker turns until the game terminates, then
//! reports the final pattern and outcome.

use super::console::Console;
use super::roles::{Checker, GameError, Guesser};
use super::state::{GameState, Outcome};
use crate::core::Pattern;
use crate::solver::StrategyError;

/// Final report of one completed game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: Outcome,
    pub pattern: Pattern,
    pub guesses: usize,
}

/// Play one game to completion
///
/// The checker commits a secret first; then each turn the guesser proposes a
/// letter, the checker reveals the updated pattern, and termination is
/// evaluated. An exhausted alphabet forces a loss rather than an error.
///
/// # Errors
/// Returns `GameError::Aborted` when a human participant quits, or the
/// underlying error if input cannot be obtained.
pub fn run_game<G, C>(
    guesser: &mut G,
    checker: &mut C,
    console: &mut dyn Console,
) -> Result<GameReport, GameError>
where
    G: Guesser + ?Sized,
    C: Checker + ?Sized,
{
    let secret_len = checker.secret_length(console)?;
    let mut state = GameState::new(secret_len);

    while !state.is_over() {
        let letter = match guesser.next_letter(&state, console) {
            Ok(letter) => letter,
            Err(GameError::Strategy(StrategyError::AlphabetExhausted)) => {
                state.force_loss();
                break;
            }
            Err(e) => return Err(e),
        };
        state.record_guess(letter);

        let next = checker.reveal(&state, console)?;
        state.apply_reveal(next)?;
        state.evaluate();
    }

    Ok(GameReport {
        outcome: state.outcome().unwrap_or(Outcome::Lost),
        pattern: state.pattern().clone(),
        guesses: state.guesses_made(),
    })
}
