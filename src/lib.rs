//! Hangman Solver
//!
//! Terminal Hangman between a human and a computer opponent. Either side can
//! guess or hold the word; the computer guesser narrows a dictionary against
//! the revealed pattern and picks letters by candidate coverage.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::{GuessedSet, Pattern, Word};
//!
//! let secret = Word::new("cat").unwrap();
//! let mut guessed = GuessedSet::new();
//! guessed.insert(b'c');
//!
//! let pattern = Pattern::reveal(&secret, guessed);
//! assert_eq!(pattern.to_string(), "c__");
//! assert!(pattern.admits(&Word::new("car").unwrap(), guessed));
//! ```

// Core domain types
pub mod core;

// Candidate word dictionary
pub mod dictionary;

// Guessing algorithms
pub mod solver;

// Game loop, roles, console boundary
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
