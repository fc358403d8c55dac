//! Word-list clean-up command

use crate::dictionary::{FilterStats, filter_word_list};
use std::io;
use std::path::Path;

/// Filter a word list to its lowercase-alphabetic entries and report counts
///
/// Writes to `output`, or back over `input` when no output path is given.
///
/// # Errors
/// Returns an I/O error if the list cannot be read or written.
pub fn run_filter(input: &Path, output: Option<&Path>) -> io::Result<FilterStats> {
    let stats = filter_word_list(input, output)?;

    let destination = output.unwrap_or(input);
    println!("words in {}: {}", input.display(), stats.read);
    println!("words in {}: {}", destination.display(), stats.kept);

    Ok(stats)
}
