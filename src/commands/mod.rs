//! Command implementations

pub mod bench;
pub mod filter;
pub mod play;

pub use bench::{BenchResult, run_bench};
pub use filter::run_filter;
pub use play::{PlayConfig, RoleKind, run_play};
