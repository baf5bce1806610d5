//! Application constants for askline
//!
//! This module contains the process-wide defaults, warning messages,
//! and token tables used throughout the library.

// =============================================================================
// Retry Configuration
// =============================================================================

/// Default attempt budget when the caller does not supply one
pub const DEFAULT_ATTEMPTS: u32 = 3;

// =============================================================================
// Default Warning Messages
// =============================================================================

/// Built-in warning messages, one per validation failure kind.
///
/// Used when the caller supplies no warning of their own.
pub mod warnings {
    /// Empty or whitespace-only input
    pub const EMPTY_INPUT: &str = "Input is empty. Please input a valid string.";

    /// Input that is not a floating-point literal
    pub const NON_FLOAT: &str =
        "Not a floating-point number. Please input a valid floating-point number.";

    /// Input that is not an integer literal
    pub const NON_INTEGER: &str = "Not an integer. Please input a valid integer number.";

    /// Input that is not an ISO-8601 calendar date
    pub const INVALID_DATE: &str = "Invalid ISO format. Example: (1970-01-01)";

    /// Input that is not a recognized confirmation token
    pub const INVALID_CONFIRMATION: &str = "Invalid confirmation string. Example: \"yes\"";

    /// Value outside the declared interval
    pub const OUT_OF_BOUNDS: &str = "Value not within bounds.";
}

// =============================================================================
// Confirmation Tokens
// =============================================================================

/// Tokens accepted as an affirmative answer (matched case-insensitively)
pub const AFFIRMATIVE_TOKENS: &[&str] = &["yes", "y"];

/// Tokens accepted as a negative answer (matched case-insensitively)
pub const NEGATIVE_TOKENS: &[&str] = &["no", "n"];

/// Prompt used by confirmation reads when the caller supplies none
pub const DEFAULT_CONFIRMATION_PROMPT: &str = "(Y/n) ";

// =============================================================================
// Text Normalization
// =============================================================================

/// Dash and minus glyphs folded to ASCII `-` after compatibility
/// normalization: katakana prolonged sound mark, full-width hyphen-minus,
/// horizontal bar, em dash, hyphen.
pub const DASH_VARIANTS: &[char] = &['ー', '－', '―', '—', '‐'];
