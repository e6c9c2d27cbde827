//! Comparison operators for filter clauses.

use std::cmp::Ordering;
use std::fmt;

/// Comparison operator for a filter clause.
///
/// - `Eq` works on every value type
/// - `Contains` is a case-sensitive substring test on strings
/// - `Gte` / `Lte` are inclusive bounds on integers and timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (exact match).
    Eq,
    /// String contains substring.
    Contains,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
}

impl Op {
    /// Evaluates a comparison given an ordering result.
    ///
    /// Used for integer and timestamp comparisons. `Contains` has no
    /// ordering form and always evaluates to `false` here.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Gte => ordering != Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Contains => "contains",
            Op::Gte => "gte",
            Op::Lte => "lte",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_ordering_bounds_are_inclusive() {
        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(Op::Gte.eval_ordering(Ordering::Greater));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));

        assert!(Op::Lte.eval_ordering(Ordering::Equal));
        assert!(Op::Lte.eval_ordering(Ordering::Less));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));
    }

    #[test]
    fn eval_ordering_eq() {
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));
        assert!(!Op::Contains.eval_ordering(Ordering::Equal));
    }

    #[test]
    fn display() {
        assert_eq!(Op::Contains.to_string(), "contains");
        assert_eq!(Op::Lte.to_string(), "lte");
    }
}
