//! The attempt loop.
//!
//! A single generic combinator wraps every single-shot parser in the crate:
//! invoke up to `attempts` times in strict sequence, swallow retryable
//! validation failures, propagate everything else immediately, and raise
//! exhaustion once the budget is consumed.

use tracing::{debug, trace};

use crate::reader::warn;
use crate::{Error, Result};

/// Invoke `attempt` until it succeeds or the budget runs out.
///
/// - A budget of 0 is a configuration error; `attempt` is never invoked.
/// - A budget of 1 invokes once and propagates any failure verbatim, so a
///   single-shot caller sees the underlying error rather than exhaustion.
/// - Otherwise each retryable failure (see [`Error::is_retryable`]) has its
///   warning printed when `verbose` is set, and the next attempt begins.
///   Non-retryable failures propagate on first occurrence without consuming
///   the remaining budget. When every attempt has failed,
///   [`Error::AttemptsExceeded`] reports the total count.
pub fn with_attempts<T, F>(mut attempt: F, attempts: u32, verbose: bool) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    if attempts == 0 {
        return Err(Error::InvalidAttempts(attempts));
    }
    if attempts == 1 {
        return attempt();
    }

    for round in 1..=attempts {
        trace!(round, attempts, "starting input attempt");
        match attempt() {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() => {
                debug!(round, %error, "retryable input failure");
                if verbose {
                    warn(&error.to_string());
                }
            }
            Err(error) => return Err(error),
        }
    }

    debug!(attempts, "attempt budget exhausted");
    Err(Error::AttemptsExceeded { attempts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_attempts_is_a_configuration_error() {
        let mut calls = 0;
        let result: Result<()> = with_attempts(
            || {
                calls += 1;
                Ok(())
            },
            0,
            false,
        );
        assert!(matches!(result.unwrap_err(), Error::InvalidAttempts(0)));
        assert_eq!(calls, 0, "the function must never be invoked");
    }

    #[test]
    fn single_attempt_propagates_the_failure_verbatim() {
        let result: Result<i64> = with_attempts(|| Err(Error::empty_input(None)), 1, false);
        // Not wrapped as exhaustion: the caller sees the underlying kind.
        assert!(matches!(result.unwrap_err(), Error::EmptyInput { .. }));
    }

    #[test]
    fn single_attempt_returns_success() {
        let result = with_attempts(|| Ok(7), 1, false);
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn success_on_last_attempt_consumes_the_whole_budget() {
        let mut calls = 0;
        let result = with_attempts(
            || {
                calls += 1;
                if calls < 4 {
                    Err(Error::non_float(None))
                } else {
                    Ok(calls)
                }
            },
            4,
            false,
        );
        assert_eq!(result.unwrap(), 4);
        assert_eq!(calls, 4);
    }

    #[test]
    fn early_success_leaves_remaining_attempts_unused() {
        let mut calls = 0;
        let result = with_attempts(
            || {
                calls += 1;
                Ok("done")
            },
            5,
            false,
        );
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls, 1);
    }

    #[test]
    fn exhaustion_reports_the_total_attempt_count() {
        let mut calls = 0;
        let result: Result<()> = with_attempts(
            || {
                calls += 1;
                Err(Error::out_of_bounds(None))
            },
            3,
            false,
        );
        assert!(matches!(
            result.unwrap_err(),
            Error::AttemptsExceeded { attempts: 3 }
        ));
        assert_eq!(calls, 3);
    }

    #[test]
    fn fatal_failure_propagates_without_consuming_the_budget() {
        let mut calls = 0;
        let result: Result<()> = with_attempts(
            || {
                calls += 1;
                Err(Error::InvalidNotation {
                    notation: "}{".to_string(),
                })
            },
            5,
            false,
        );
        assert!(matches!(result.unwrap_err(), Error::InvalidNotation { .. }));
        assert_eq!(calls, 1, "a configuration error must not be retried");
    }
}
