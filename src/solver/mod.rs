//! Computer-guesser algorithms
//!
//! Candidate narrowing against accumulated feedback and the letter-selection
//! strategies built on top of it.

pub mod coverage;
mod filter;
pub mod partition;
pub mod strategy;

pub use filter::CandidateSet;
pub use strategy::{
    CoverageStrategy, PartitionStrategy, RandomStrategy, Strategy, StrategyError, StrategyKind,
};
