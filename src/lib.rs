//! Askline
//!
//! A Rust library for acquiring typed, bounds-checked values from single
//! lines of console input, retrying automatically on invalid input until a
//! bounded attempt budget is exhausted.
//!
//! This library provides tools for:
//! - Prompting for non-empty strings, floats, integers, ISO-8601 dates, and
//!   yes/no confirmations
//! - Constraining numeric input to an interval with inclusive or exclusive
//!   bounds on either side
//! - Normalizing full-width Unicode digits and dash variants to ASCII before
//!   numeric parsing
//! - Retrying invalid input up to an attempt budget, with an optional
//!   warning printed before each reprompt
//! - Distinguishing retryable validation failures from fatal configuration
//!   errors and attempt exhaustion
//!
//! The terminal itself sits behind the [`LineReader`] trait, so every prompt
//! can be driven by a scripted reader in tests.
//!
//! # Example
//!
//! ```no_run
//! use askline::{Constraint, Notation, PromptOptions, Prompter};
//!
//! fn main() -> askline::Result<()> {
//!     let mut prompter = Prompter::stdin();
//!     let opts = PromptOptions::new()
//!         .with_prompt("How many stations? ")
//!         .with_attempts(3)
//!         .with_verbose(true);
//!     let constraint = Constraint::new(1.0, 100.0, Notation::Inclusive);
//!     let count = prompter.get_constrained_int(&opts, &constraint)?;
//!     println!("processing {count} stations");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod interval;
pub mod normalize;
pub mod prompter;
pub mod reader;
pub mod retry;

// Re-export commonly used types
pub use config::{Constraint, PromptOptions};
pub use error::Error;
pub use interval::Notation;
pub use prompter::Prompter;
pub use reader::{LineReader, StdinReader};
pub use retry::with_attempts;

// Stdin-backed convenience functions, one per value kind
pub use prompter::{
    get_confirmation, get_constrained_float, get_constrained_int, get_date, get_float, get_int,
    get_non_empty_string, get_non_negative_float, get_non_negative_int, get_positive_float,
    get_positive_int,
};

/// Result type alias for askline operations
pub type Result<T> = std::result::Result<T, Error>;
