//! Typed input acquisition.
//!
//! [`Prompter`] owns a [`LineReader`] and exposes two layers over it:
//! single-shot `read_*` parsers that consume exactly one line and fail with
//! a specific validation kind, and retrying `get_*` methods that wrap each
//! parser in the attempt loop. The free functions at the bottom of the
//! module are stdin-backed one-liners for callers that do not need to hold
//! a reader.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::{Constraint, PromptOptions};
use crate::constants::{AFFIRMATIVE_TOKENS, DEFAULT_CONFIRMATION_PROMPT, NEGATIVE_TOKENS};
use crate::convert::float_to_int;
use crate::normalize::normalize_to_ascii;
use crate::reader::{LineReader, StdinReader};
use crate::retry::with_attempts;
use crate::{Error, Result};


/// Acquires typed, validated values from a line reader
#[derive(Debug)]
pub struct Prompter<R> {
    reader: R,
}

impl Prompter<StdinReader> {
    /// Create a prompter reading from the process's terminal
    pub fn stdin() -> Self {
        Self::new(StdinReader::new())
    }
}

impl<R: LineReader> Prompter<R> {
    /// Create a prompter over any line reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consume the prompter and return its reader
    pub fn into_reader(self) -> R {
        self.reader
    }

    // =========================================================================
    // Single-shot parsers (one line read, no retry)
    // =========================================================================

    /// Read one line and require it to be non-empty.
    ///
    /// The returned text is the raw line, not normalized; whitespace-only
    /// lines fail with the empty-input kind.
    pub fn read_non_empty_string(&mut self, opts: &PromptOptions) -> Result<String> {
        let line = self.reader.read_line(&opts.prompt)?;
        if line.trim().is_empty() {
            Err(Error::empty_input(opts.warning.as_deref()))
        } else {
            Ok(line)
        }
    }

    /// Read one line and parse it as a floating-point number
    pub fn read_float(&mut self, opts: &PromptOptions) -> Result<f64> {
        let raw = self.read_non_empty_string(opts)?;
        normalize_to_ascii(&raw)
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::non_float(opts.warning.as_deref()))
    }

    /// Read one line and parse it as an integer.
    ///
    /// A floating literal with a zero fractional part is accepted through
    /// the lossless float-to-integer path, so `"1.0"` yields `1` while
    /// `"1.01"` fails with the non-integer kind.
    pub fn read_int(&mut self, opts: &PromptOptions) -> Result<i64> {
        let raw = self.read_non_empty_string(opts)?;
        let normalized = normalize_to_ascii(&raw);
        let token = normalized.trim();
        if let Ok(value) = token.parse::<i64>() {
            return Ok(value);
        }
        let as_float = token
            .parse::<f64>()
            .map_err(|_| Error::non_integer(opts.warning.as_deref()))?;
        float_to_int(as_float, opts.warning.as_deref())
    }

    /// Read one line and parse it as an ISO-8601 calendar date
    pub fn read_date(&mut self, opts: &PromptOptions) -> Result<NaiveDate> {
        let raw = self.read_non_empty_string(opts)?;
        normalize_to_ascii(&raw)
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| Error::invalid_date(opts.warning.as_deref()))
    }

    /// Read one line and interpret it as a yes/no confirmation.
    ///
    /// Matches the built-in token table (`yes`/`y` and `no`/`n`,
    /// case-insensitive). When the caller supplies no prompt, `(Y/n) `
    /// is displayed.
    pub fn read_confirmation(&mut self, opts: &PromptOptions) -> Result<bool> {
        let token = self.read_confirmation_token(opts)?;
        if AFFIRMATIVE_TOKENS.contains(&token.as_str()) {
            Ok(true)
        } else if NEGATIVE_TOKENS.contains(&token.as_str()) {
            Ok(false)
        } else {
            Err(Error::invalid_confirmation(opts.warning.as_deref()))
        }
    }

    /// Read one line and interpret it against a caller-supplied token table.
    ///
    /// Keys are matched case-insensitively. Tokens absent from the table
    /// fail with the invalid-confirmation kind.
    pub fn read_confirmation_with(
        &mut self,
        opts: &PromptOptions,
        selection: &HashMap<String, bool>,
    ) -> Result<bool> {
        let token = self.read_confirmation_token(opts)?;
        selection
            .iter()
            .find(|(key, _)| key.to_lowercase() == token)
            .map(|(_, &accepted)| accepted)
            .ok_or_else(|| Error::invalid_confirmation(opts.warning.as_deref()))
    }

    fn read_confirmation_token(&mut self, opts: &PromptOptions) -> Result<String> {
        let prompt = if opts.prompt.is_empty() {
            DEFAULT_CONFIRMATION_PROMPT
        } else {
            opts.prompt.as_str()
        };
        let line = self.reader.read_line(prompt)?;
        if line.trim().is_empty() {
            return Err(Error::empty_input(opts.warning.as_deref()));
        }
        Ok(line.trim().to_lowercase())
    }

    /// Read one float and require it to lie within `constraint`
    pub fn read_constrained_float(
        &mut self,
        opts: &PromptOptions,
        constraint: &Constraint,
    ) -> Result<f64> {
        let value = self.read_float(opts)?;
        if constraint.contains(value) {
            Ok(value)
        } else {
            Err(Error::out_of_bounds(opts.warning.as_deref()))
        }
    }

    /// Read one integer and require it to lie within `constraint`
    pub fn read_constrained_int(
        &mut self,
        opts: &PromptOptions,
        constraint: &Constraint,
    ) -> Result<i64> {
        let value = self.read_int(opts)?;
        if constraint.contains(value as f64) {
            Ok(value)
        } else {
            Err(Error::out_of_bounds(opts.warning.as_deref()))
        }
    }

    // =========================================================================
    // Retrying acquisition (attempt loop around each single-shot parser)
    // =========================================================================

    /// Prompt for a non-empty string, retrying up to the attempt budget
    pub fn get_non_empty_string(&mut self, opts: &PromptOptions) -> Result<String> {
        with_attempts(
            || self.read_non_empty_string(opts),
            opts.attempts,
            opts.verbose,
        )
    }

    /// Prompt for a floating-point number, retrying up to the attempt budget
    pub fn get_float(&mut self, opts: &PromptOptions) -> Result<f64> {
        with_attempts(|| self.read_float(opts), opts.attempts, opts.verbose)
    }

    /// Prompt for a float within `constraint`, retrying up to the attempt budget
    pub fn get_constrained_float(
        &mut self,
        opts: &PromptOptions,
        constraint: &Constraint,
    ) -> Result<f64> {
        with_attempts(
            || self.read_constrained_float(opts, constraint),
            opts.attempts,
            opts.verbose,
        )
    }

    /// Prompt for a strictly positive float
    pub fn get_positive_float(&mut self, opts: &PromptOptions) -> Result<f64> {
        self.get_constrained_float(opts, &Constraint::positive())
    }

    /// Prompt for a non-negative float
    pub fn get_non_negative_float(&mut self, opts: &PromptOptions) -> Result<f64> {
        self.get_constrained_float(opts, &Constraint::non_negative())
    }

    /// Prompt for an integer, retrying up to the attempt budget
    pub fn get_int(&mut self, opts: &PromptOptions) -> Result<i64> {
        with_attempts(|| self.read_int(opts), opts.attempts, opts.verbose)
    }

    /// Prompt for an integer within `constraint`, retrying up to the attempt budget
    pub fn get_constrained_int(
        &mut self,
        opts: &PromptOptions,
        constraint: &Constraint,
    ) -> Result<i64> {
        with_attempts(
            || self.read_constrained_int(opts, constraint),
            opts.attempts,
            opts.verbose,
        )
    }

    /// Prompt for a strictly positive integer
    pub fn get_positive_int(&mut self, opts: &PromptOptions) -> Result<i64> {
        self.get_constrained_int(opts, &Constraint::positive())
    }

    /// Prompt for a non-negative integer
    pub fn get_non_negative_int(&mut self, opts: &PromptOptions) -> Result<i64> {
        self.get_constrained_int(opts, &Constraint::non_negative())
    }

    /// Prompt for an ISO-8601 calendar date, retrying up to the attempt budget
    pub fn get_date(&mut self, opts: &PromptOptions) -> Result<NaiveDate> {
        with_attempts(|| self.read_date(opts), opts.attempts, opts.verbose)
    }

    /// Prompt for a yes/no confirmation, retrying up to the attempt budget
    pub fn get_confirmation(&mut self, opts: &PromptOptions) -> Result<bool> {
        with_attempts(|| self.read_confirmation(opts), opts.attempts, opts.verbose)
    }

    /// Prompt for a confirmation against a caller-supplied token table,
    /// retrying up to the attempt budget
    pub fn get_confirmation_with(
        &mut self,
        opts: &PromptOptions,
        selection: &HashMap<String, bool>,
    ) -> Result<bool> {
        with_attempts(
            || self.read_confirmation_with(opts, selection),
            opts.attempts,
            opts.verbose,
        )
    }
}

// =============================================================================
// Stdin-backed convenience functions
// =============================================================================

/// Prompt the terminal for a non-empty string
pub fn get_non_empty_string(opts: &PromptOptions) -> Result<String> {
    Prompter::stdin().get_non_empty_string(opts)
}

/// Prompt the terminal for a floating-point number
pub fn get_float(opts: &PromptOptions) -> Result<f64> {
    Prompter::stdin().get_float(opts)
}

/// Prompt the terminal for a float within `constraint`
pub fn get_constrained_float(opts: &PromptOptions, constraint: &Constraint) -> Result<f64> {
    Prompter::stdin().get_constrained_float(opts, constraint)
}

/// Prompt the terminal for a strictly positive float
pub fn get_positive_float(opts: &PromptOptions) -> Result<f64> {
    Prompter::stdin().get_positive_float(opts)
}

/// Prompt the terminal for a non-negative float
pub fn get_non_negative_float(opts: &PromptOptions) -> Result<f64> {
    Prompter::stdin().get_non_negative_float(opts)
}

/// Prompt the terminal for an integer
pub fn get_int(opts: &PromptOptions) -> Result<i64> {
    Prompter::stdin().get_int(opts)
}

/// Prompt the terminal for an integer within `constraint`
pub fn get_constrained_int(opts: &PromptOptions, constraint: &Constraint) -> Result<i64> {
    Prompter::stdin().get_constrained_int(opts, constraint)
}

/// Prompt the terminal for a strictly positive integer
pub fn get_positive_int(opts: &PromptOptions) -> Result<i64> {
    Prompter::stdin().get_positive_int(opts)
}

/// Prompt the terminal for a non-negative integer
pub fn get_non_negative_int(opts: &PromptOptions) -> Result<i64> {
    Prompter::stdin().get_non_negative_int(opts)
}

/// Prompt the terminal for an ISO-8601 calendar date
pub fn get_date(opts: &PromptOptions) -> Result<NaiveDate> {
    Prompter::stdin().get_date(opts)
}

/// Prompt the terminal for a yes/no confirmation
pub fn get_confirmation(opts: &PromptOptions) -> Result<bool> {
    Prompter::stdin().get_confirmation(opts)
}
