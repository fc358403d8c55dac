//! Game orchestration
//!
//! State machine, player roles, console boundary, and the turn loop.

pub mod console;
mod engine;
mod roles;
mod state;

pub use console::{Console, SilentConsole, StdConsole};
pub use engine::{GameReport, run_game};
pub use roles::{
    Checker, ComputerChecker, ComputerGuesser, GameError, Guesser, HumanChecker, HumanGuesser,
};
pub use state::{GUESS_LIMIT, GameState, Outcome};
