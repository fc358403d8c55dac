//! One-game command
//!
//! Wires the selected roles and strategy into the game loop.

use crate::dictionary::Dictionary;
use crate::game::{
    ComputerChecker, ComputerGuesser, Console, GameError, GameReport, HumanChecker, HumanGuesser,
    Outcome, run_game,
};
use crate::solver::StrategyKind;

/// Which side a role is played by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Human,
    Computer,
}

impl RoleKind {
    /// Parse a role name, `None` for anything but "human"/"computer"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "human" => Some(Self::Human),
            "computer" => Some(Self::Computer),
            _ => None,
        }
    }
}

/// Configuration for one game
#[derive(Debug, Clone, Copy)]
pub struct PlayConfig {
    pub guesser: RoleKind,
    pub checker: RoleKind,
    pub strategy: StrategyKind,
    /// Fixed secret length when the computer holds the word
    pub length: Option<usize>,
}

/// Play one game with the configured roles
///
/// When the computer holds the word and loses the game, the secret is
/// disclosed afterwards.
///
/// # Errors
/// Returns `GameError::Aborted` on a human quit, `GameError::Selection` when
/// no dictionary word satisfies the requested length, or the underlying I/O
/// error from the console.
pub fn run_play(
    config: &PlayConfig,
    dictionary: &Dictionary,
    console: &mut dyn Console,
) -> Result<GameReport, GameError> {
    match (config.guesser, config.checker) {
        (RoleKind::Computer, RoleKind::Human) => {
            let mut guesser = ComputerGuesser::new(config.strategy, dictionary);
            let mut checker = HumanChecker;
            run_game(&mut guesser, &mut checker, console)
        }
        (RoleKind::Computer, RoleKind::Computer) => {
            let mut rng = rand::rng();
            let mut checker = ComputerChecker::sample(dictionary, &mut rng, config.length)?;
            let mut guesser = ComputerGuesser::new(config.strategy, dictionary);
            let report = run_game(&mut guesser, &mut checker, console)?;
            disclose_on_loss(&report, &checker, console);
            Ok(report)
        }
        (RoleKind::Human, RoleKind::Computer) => {
            let mut rng = rand::rng();
            let mut checker = ComputerChecker::sample(dictionary, &mut rng, config.length)?;
            let mut guesser = HumanGuesser;
            let report = run_game(&mut guesser, &mut checker, console)?;
            disclose_on_loss(&report, &checker, console);
            Ok(report)
        }
        (RoleKind::Human, RoleKind::Human) => {
            let mut guesser = HumanGuesser;
            let mut checker = HumanChecker;
            run_game(&mut guesser, &mut checker, console)
        }
    }
}

fn disclose_on_loss(report: &GameReport, checker: &ComputerChecker, console: &mut dyn Console) {
    if report.outcome == Outcome::Lost {
        console.say(&format!("the word was {}", checker.secret()));
    }
}
