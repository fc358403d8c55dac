//! Console boundary
//!
//! Game roles never touch stdin/stdout directly; all prompts and messages go
//! through the `Console` trait so the loop is testable without a terminal.

use std::io::{self, Write};

/// Line-oriented prompt/response interface for human participants
pub trait Console {
    /// Ask for one line of input, returning it with the terminator stripped
    ///
    /// # Errors
    /// Returns an I/O error if input cannot be read.
    fn prompt(&mut self, text: &str) -> io::Result<String>;

    /// Print one line of output
    fn say(&mut self, text: &str);
}

/// Console backed by process stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        print!("{text}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().to_string())
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Console for games with no human participant
///
/// Used by self-play (benchmarks); any prompt is a programming error since
/// only human roles prompt.
#[derive(Debug, Default)]
pub struct SilentConsole;

impl Console for SilentConsole {
    fn prompt(&mut self, _text: &str) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no interactive console available",
        ))
    }

    fn say(&mut self, _text: &str) {}
}

/// Console driven by a canned list of replies, recording everything shown
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    replies: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|&r| r.to_string()).collect(),
            transcript: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        self.transcript.push(text.to_string());
        self.replies.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted replies exhausted")
        })
    }

    fn say(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
