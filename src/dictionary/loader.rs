//! Word list loading and clean-up utilities
//!
//! Provides functions to load word lists from files, convert the embedded
//! list, and rewrite a raw list down to its lowercase-alphabetic entries.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Reads a line-delimited UTF-8 word list, strips line terminators, and
/// returns the valid `Word` entries, skipping anything that fails validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::dictionary::loader::words_from_slice;
/// use hangman_solver::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Counts reported by [`filter_word_list`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read from the input
    pub read: usize,
    /// Entries kept after filtering
    pub kept: usize,
}

/// Rewrite a raw word list keeping only lowercase-alphabetic entries
///
/// Reads `input`, drops every line that is not a valid word (uppercase,
/// digits, punctuation, apostrophes), and writes the survivors one per line.
/// When `output` is `None` the input file is overwritten in place. The
/// transform is idempotent: filtering an already-filtered list is a no-op.
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read or the output cannot be
/// written.
pub fn filter_word_list(input: &Path, output: Option<&Path>) -> io::Result<FilterStats> {
    let content = fs::read_to_string(input)?;

    let read = content.lines().count();
    let kept: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && Word::new(*line).is_ok())
        .collect();

    let mut out = kept.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    fs::write(output.unwrap_or(input), out)?;

    Ok(FilterStats {
        read,
        kept: kept.len(),
    })
}
