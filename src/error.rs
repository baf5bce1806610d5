//! Error handling for input acquisition.
//!
//! Two families of failure exist: fatal configuration errors (a bad attempt
//! budget or interval notation, raised before any input is read) and
//! retryable validation errors (bad input that the attempt loop may
//! reprompt for). [`Error::is_retryable`] is the single place that
//! distinction lives.

use std::io;
use thiserror::Error;

use crate::constants::warnings;

/// Error types for input acquisition operations
#[derive(Error, Debug)]
pub enum Error {
    /// Attempt budget is zero; the wrapped parser was never invoked
    #[error("{0} is not a valid number of attempts")]
    InvalidAttempts(u32),

    /// Interval notation tag is not one of the four recognized forms
    #[error("invalid interval notation '{notation}'; valid notations: () or [] or (] or [)")]
    InvalidNotation { notation: String },

    /// The attempt budget was fully consumed without a valid input
    #[error("attempts exceeded, total attempts: {attempts}")]
    AttemptsExceeded { attempts: u32 },

    /// Input line was empty or whitespace-only
    #[error("{warning}")]
    EmptyInput { warning: String },

    /// Input did not parse as a floating-point number
    #[error("{warning}")]
    NonFloat { warning: String },

    /// Input did not parse as an integer (including floats with a
    /// non-zero fractional part)
    #[error("{warning}")]
    NonInteger { warning: String },

    /// Input did not parse as an ISO-8601 calendar date
    #[error("{warning}")]
    InvalidDate { warning: String },

    /// Input was not a recognized confirmation token
    #[error("{warning}")]
    InvalidConfirmation { warning: String },

    /// Parsed value lies outside the declared interval
    #[error("{warning}")]
    OutOfBounds { warning: String },

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create an empty-input error, falling back to the default warning
    pub fn empty_input(warning: Option<&str>) -> Self {
        Self::EmptyInput {
            warning: warning.unwrap_or(warnings::EMPTY_INPUT).to_string(),
        }
    }

    /// Create a non-float error, falling back to the default warning
    pub fn non_float(warning: Option<&str>) -> Self {
        Self::NonFloat {
            warning: warning.unwrap_or(warnings::NON_FLOAT).to_string(),
        }
    }

    /// Create a non-integer error, falling back to the default warning
    pub fn non_integer(warning: Option<&str>) -> Self {
        Self::NonInteger {
            warning: warning.unwrap_or(warnings::NON_INTEGER).to_string(),
        }
    }

    /// Create an invalid-date error, falling back to the default warning
    pub fn invalid_date(warning: Option<&str>) -> Self {
        Self::InvalidDate {
            warning: warning.unwrap_or(warnings::INVALID_DATE).to_string(),
        }
    }

    /// Create an invalid-confirmation error, falling back to the default warning
    pub fn invalid_confirmation(warning: Option<&str>) -> Self {
        Self::InvalidConfirmation {
            warning: warning.unwrap_or(warnings::INVALID_CONFIRMATION).to_string(),
        }
    }

    /// Create an out-of-bounds error, falling back to the default warning
    pub fn out_of_bounds(warning: Option<&str>) -> Self {
        Self::OutOfBounds {
            warning: warning.unwrap_or(warnings::OUT_OF_BOUNDS).to_string(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether the attempt loop may swallow this failure and reprompt.
    ///
    /// Configuration errors, exhaustion, and I/O failures are fatal and
    /// propagate immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::NonFloat { .. }
                | Self::NonInteger { .. }
                | Self::InvalidDate { .. }
                | Self::InvalidConfirmation { .. }
                | Self::OutOfBounds { .. }
        )
    }
}
