//! Configuration values for input acquisition.
//!
//! Every prompt is driven by an explicit [`PromptOptions`] value with a
//! fixed field set, and constrained prompts additionally carry a
//! [`Constraint`] describing the interval the parsed value must lie in.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::constants::DEFAULT_ATTEMPTS;
use crate::interval::Notation;

/// Options shared by every acquisition function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptOptions {
    /// Text printed before each read; empty means no prompt
    #[serde(default)]
    pub prompt: String,

    /// Warning printed on a retryable failure in verbose mode.
    /// `None` falls back to the built-in message for the failure kind.
    #[serde(default)]
    pub warning: Option<String>,

    /// Attempt budget; must be positive. A budget of 1 disables retry.
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Whether to print the warning before each reprompt
    #[serde(default)]
    pub verbose: bool,
}

fn default_attempts() -> u32 {
    DEFAULT_ATTEMPTS
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            warning: None,
            attempts: DEFAULT_ATTEMPTS,
            verbose: false,
        }
    }
}

impl PromptOptions {
    /// Create options with the default attempt budget, no prompt, the
    /// built-in warnings, and verbose output off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prompt text
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the warning printed on retryable failures
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Set the attempt budget
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Enable or disable warning output on reprompt
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// An interval a parsed numeric value must lie within.
///
/// There is no ordering requirement between `lower` and `upper`; a reversed
/// pair simply rejects every value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Lower endpoint
    pub lower: f64,
    /// Upper endpoint
    pub upper: f64,
    /// Inclusivity of each endpoint
    pub notation: Notation,
}

impl Constraint {
    /// Create a constraint from explicit endpoints and a notation
    pub fn new(lower: f64, upper: f64, notation: Notation) -> Self {
        Self {
            lower,
            upper,
            notation,
        }
    }

    /// Create a constraint from a symbolic notation tag such as `"[)"`.
    ///
    /// Fails with [`crate::Error::InvalidNotation`] for unrecognized tags,
    /// before any input is read.
    pub fn parse(lower: f64, upper: f64, notation: &str) -> Result<Self> {
        Ok(Self::new(lower, upper, notation.parse()?))
    }

    /// Strictly positive values: `(0, +inf)` with both endpoints excluded
    pub fn positive() -> Self {
        Self::new(0.0, f64::INFINITY, Notation::Exclusive)
    }

    /// Non-negative values: `[0, +inf)` with the lower endpoint included
    pub fn non_negative() -> Self {
        Self::new(0.0, f64::INFINITY, Notation::UpperExclusive)
    }

    /// Whether `value` lies within this interval
    pub fn contains(&self, value: f64) -> bool {
        self.notation.contains(value, self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_options() {
        let opts = PromptOptions::new();
        assert_eq!(opts.prompt, "");
        assert_eq!(opts.warning, None);
        assert_eq!(opts.attempts, DEFAULT_ATTEMPTS);
        assert!(!opts.verbose);
    }

    #[test]
    fn builder_methods_set_fields() {
        let opts = PromptOptions::new()
            .with_prompt("Age: ")
            .with_warning("Try again.")
            .with_attempts(5)
            .with_verbose(true);
        assert_eq!(opts.prompt, "Age: ");
        assert_eq!(opts.warning.as_deref(), Some("Try again."));
        assert_eq!(opts.attempts, 5);
        assert!(opts.verbose);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: PromptOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.attempts, DEFAULT_ATTEMPTS);
        assert!(!opts.verbose);

        let opts: PromptOptions =
            serde_json::from_str(r#"{"prompt": "N: ", "attempts": 1}"#).unwrap();
        assert_eq!(opts.prompt, "N: ");
        assert_eq!(opts.attempts, 1);
    }

    #[test]
    fn positive_excludes_zero() {
        let constraint = Constraint::positive();
        assert!(!constraint.contains(0.0));
        assert!(constraint.contains(f64::MIN_POSITIVE));
        assert!(constraint.contains(1e300));
        assert!(!constraint.contains(-1.0));
    }

    #[test]
    fn non_negative_includes_zero() {
        let constraint = Constraint::non_negative();
        assert!(constraint.contains(0.0));
        assert!(constraint.contains(7.5));
        assert!(!constraint.contains(-0.25));
    }

    #[test]
    fn parse_rejects_unknown_notation() {
        let err = Constraint::parse(0.0, 1.0, "><").unwrap_err();
        assert!(matches!(err, Error::InvalidNotation { notation } if notation == "><"));
    }

    #[test]
    fn reversed_bounds_reject_everything() {
        let constraint = Constraint::new(4.0, 1.0, Notation::Inclusive);
        assert!(!constraint.contains(0.0));
        assert!(!constraint.contains(2.5));
        assert!(!constraint.contains(5.0));
    }
}
