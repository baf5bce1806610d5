//! Terminal line reading and warning output.
//!
//! The [`LineReader`] trait is the seam between the parsers and the
//! terminal: production code uses [`StdinReader`], tests substitute a
//! scripted reader. Prompts cannot be exercised against real stdin in a
//! test harness, so everything above this module is written against the
//! trait.

use std::io::{self, Write};

use colored::Colorize;

use crate::{Error, Result};

/// A blocking source of single lines of text
pub trait LineReader {
    /// Display `prompt` and read exactly one line, without its trailing
    /// newline. May return an empty string (including at end of input).
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Line reader backed by the process's stdin and stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinReader;

impl StdinReader {
    /// Create a stdin-backed reader
    pub fn new() -> Self {
        Self
    }
}

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !prompt.is_empty() {
            print!("{prompt}");
            io::stdout()
                .flush()
                .map_err(|e| Error::io("failed to flush stdout", e))?;
        }

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .map_err(|e| Error::io("failed to read user input", e))?;

        // read_line keeps the newline; at end of input the buffer stays empty,
        // which downstream parsers treat as an empty line.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Print a reprompt warning to the user.
///
/// Skipped entirely for empty messages.
pub fn warn(message: &str) {
    if message.is_empty() {
        return;
    }
    println!("{}", message.yellow());
}
