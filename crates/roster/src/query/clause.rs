//! Clause types for filter predicates.
//!
//! A [`Clause`] is a single predicate: a field, an operator, and a value to
//! compare against.

use crate::query::op::Op;
use crate::query::traits::{Discriminant, Field, Fields};
use crate::query::value::{Timestamp, Value};

/// A single filter predicate.
///
/// ```
/// use roster::{Clause, ClauseValue, Field, Op, Value};
///
/// let clause = Clause::new(Field::Name, Op::Contains, "ara");
/// assert!(clause.matches(&Value::String("Aragorn")));
/// assert_eq!(clause.value, ClauseValue::String("ara".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The field to compare.
    pub field: Field,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: Field, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field,
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a record.
    pub fn test<T: Fields>(&self, item: &T) -> bool {
        self.matches(&item.field_value(self.field))
    }

    /// Evaluates this clause against a field value.
    ///
    /// A type mismatch between the clause and the field never matches.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(pattern), Value::String(s)) => match self.op {
                Op::Eq => *s == pattern.as_str(),
                Op::Contains => s.contains(pattern.as_str()),
                Op::Gte | Op::Lte => false,
            },
            (ClauseValue::Int(clause), Value::Int(field)) => {
                self.op.eval_ordering(field.cmp(clause))
            }
            (ClauseValue::Timestamp(clause), Value::Timestamp(field)) => {
                self.op.eval_ordering(field.cmp(clause))
            }
            (ClauseValue::Enum(clause), Value::Enum(field)) => {
                self.op == Op::Eq && field == clause
            }
            (ClauseValue::Bool(clause), Value::Bool(field)) => {
                self.op == Op::Eq && field == clause
            }
            _ => false,
        }
    }
}

/// Owned value stored in a clause.
///
/// Unlike [`Value`], which borrows from the record, `ClauseValue` owns its
/// data so it can live in a compiled filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseValue {
    String(String),
    Int(i64),
    Timestamp(Timestamp),
    Enum(u32),
    Bool(bool),
}

impl ClauseValue {
    /// Builds an enum clause value from any closed enum.
    pub fn of_enum<E: Discriminant>(value: &E) -> Self {
        ClauseValue::Enum(value.discriminant())
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<i32> for ClauseValue {
    fn from(n: i32) -> Self {
        ClauseValue::Int(i64::from(n))
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Int(n)
    }
}

impl From<Timestamp> for ClauseValue {
    fn from(t: Timestamp) -> Self {
        ClauseValue::Timestamp(t)
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}
