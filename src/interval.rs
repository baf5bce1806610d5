//! Interval notation and containment.
//!
//! The four notations mirror the usual mathematical bracket forms: `()`
//! excludes both endpoints, `[]` includes both, `(]` and `[)` mix. Each
//! side is decided independently, so containment is two comparisons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Inclusivity of an interval's two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notation {
    /// `()` - both endpoints excluded
    Exclusive,
    /// `[]` - both endpoints included
    Inclusive,
    /// `(]` - lower excluded, upper included
    LowerExclusive,
    /// `[)` - lower included, upper excluded
    UpperExclusive,
}

impl Notation {
    /// Decide whether `value` lies between `lower` and `upper` under this
    /// notation. An exclusive side rejects equality with its endpoint.
    pub fn contains<T: PartialOrd>(self, value: T, lower: T, upper: T) -> bool {
        let above_lower = match self {
            Self::Exclusive | Self::LowerExclusive => lower < value,
            Self::Inclusive | Self::UpperExclusive => lower <= value,
        };
        let below_upper = match self {
            Self::Exclusive | Self::UpperExclusive => value < upper,
            Self::Inclusive | Self::LowerExclusive => value <= upper,
        };
        above_lower && below_upper
    }

    /// The symbolic tag for this notation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exclusive => "()",
            Self::Inclusive => "[]",
            Self::LowerExclusive => "(]",
            Self::UpperExclusive => "[)",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "()" => Ok(Self::Exclusive),
            "[]" => Ok(Self::Inclusive),
            "(]" => Ok(Self::LowerExclusive),
            "[)" => Ok(Self::UpperExclusive),
            other => Err(Error::InvalidNotation {
                notation: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_rejects_both_endpoints() {
        let n = Notation::Exclusive;
        assert!(!n.contains(1.0, 1.0, 4.0));
        assert!(!n.contains(4.0, 1.0, 4.0));
        assert!(n.contains(2.5, 1.0, 4.0));
        assert!(!n.contains(0.0, 1.0, 4.0));
        assert!(!n.contains(5.0, 1.0, 4.0));
    }

    #[test]
    fn inclusive_accepts_both_endpoints() {
        let n = Notation::Inclusive;
        assert!(n.contains(1.0, 1.0, 4.0));
        assert!(n.contains(4.0, 1.0, 4.0));
        assert!(n.contains(2.5, 1.0, 4.0));
        assert!(!n.contains(0.99, 1.0, 4.0));
        assert!(!n.contains(4.01, 1.0, 4.0));
    }

    #[test]
    fn lower_exclusive_mixes_sides() {
        let n = Notation::LowerExclusive;
        assert!(!n.contains(1.0, 1.0, 4.0));
        assert!(n.contains(4.0, 1.0, 4.0));
        assert!(n.contains(2.0, 1.0, 4.0));
    }

    #[test]
    fn upper_exclusive_mixes_sides() {
        let n = Notation::UpperExclusive;
        assert!(n.contains(1.0, 1.0, 4.0));
        assert!(!n.contains(4.0, 1.0, 4.0));
        assert!(n.contains(2.0, 1.0, 4.0));
    }

    #[test]
    fn containment_works_for_integers() {
        assert!(Notation::Inclusive.contains(10, 10, 20));
        assert!(!Notation::Exclusive.contains(10, 10, 20));
        assert!(Notation::UpperExclusive.contains(19, 10, 20));
        assert!(!Notation::UpperExclusive.contains(20, 10, 20));
    }

    #[test]
    fn degenerate_single_point_interval() {
        // [5, 5] contains exactly 5; (5, 5) contains nothing.
        assert!(Notation::Inclusive.contains(5, 5, 5));
        assert!(!Notation::Exclusive.contains(5, 5, 5));
        assert!(!Notation::LowerExclusive.contains(5, 5, 5));
        assert!(!Notation::UpperExclusive.contains(5, 5, 5));
    }

    #[test]
    fn reversed_bounds_contain_nothing() {
        for n in [
            Notation::Exclusive,
            Notation::Inclusive,
            Notation::LowerExclusive,
            Notation::UpperExclusive,
        ] {
            assert!(!n.contains(2.0, 4.0, 1.0), "{n} accepted a reversed pair");
        }
    }

    #[test]
    fn from_str_accepts_the_four_tags() {
        assert_eq!("()".parse::<Notation>().unwrap(), Notation::Exclusive);
        assert_eq!("[]".parse::<Notation>().unwrap(), Notation::Inclusive);
        assert_eq!("(]".parse::<Notation>().unwrap(), Notation::LowerExclusive);
        assert_eq!("[)".parse::<Notation>().unwrap(), Notation::UpperExclusive);
    }

    #[test]
    fn from_str_rejects_unknown_tags() {
        for bad in ["", "((", "][", "[", "<>"] {
            let err = bad.parse::<Notation>().unwrap_err();
            assert!(matches!(err, Error::InvalidNotation { .. }), "{bad}");
        }
    }

    #[test]
    fn display_round_trips() {
        for n in [
            Notation::Exclusive,
            Notation::Inclusive,
            Notation::LowerExclusive,
            Notation::UpperExclusive,
        ] {
            assert_eq!(n.to_string().parse::<Notation>().unwrap(), n);
        }
    }
}
