//! Sort keys and the sorter.
//!
//! Sorting is always ascending and stable: records that compare equal keep
//! the relative order they had on input.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;
use crate::query::traits::{Field, Fields};

/// Selectable sort key for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl SortKey {
    /// All keys in declaration order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Experience,
        SortKey::Birthday,
        SortKey::Level,
    ];

    /// The record field this key orders by.
    pub fn field(self) -> Field {
        match self {
            SortKey::Id => Field::Id,
            SortKey::Name => Field::Name,
            SortKey::Experience => Field::Experience,
            SortKey::Birthday => Field::Birthday,
            SortKey::Level => Field::Level,
        }
    }

    /// Returns the wire name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "NAME",
            SortKey::Experience => "EXPERIENCE",
            SortKey::Birthday => "BIRTHDAY",
            SortKey::Level => "LEVEL",
        }
    }

    /// Compares two records by this key.
    ///
    /// Mismatched value types cannot occur for a well-formed [`Fields`]
    /// implementation; they compare equal so the sort stays total.
    pub fn compare<T: Fields>(self, a: &T, b: &T) -> Ordering {
        let field = self.field();
        a.field_value(field)
            .compare(&b.field_value(field))
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseKindError::new("order", s))
    }
}

/// Returns `items` ordered ascending by `key`.
pub fn sort<T: Fields>(mut items: Vec<T>, key: SortKey) -> Vec<T> {
    // `sort_by` is stable
    items.sort_by(|a, b| key.compare(a, b));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::value::{Timestamp, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
        name: &'static str,
        born: i64,
        xp: i32,
    }

    impl Fields for Row {
        fn field_value(&self, field: Field) -> Value<'_> {
            match field {
                Field::Id => Value::Int(self.id as i64),
                Field::Name => Value::String(self.name),
                Field::Birthday => Value::Timestamp(Timestamp(self.born)),
                Field::Experience | Field::Level => Value::Int(i64::from(self.xp)),
                _ => Value::Bool(false),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 3, name: "carol", born: 30, xp: 10 },
            Row { id: 1, name: "alice", born: 20, xp: 10 },
            Row { id: 2, name: "bob", born: 10, xp: 5 },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn sort_by_each_key() {
        assert_eq!(ids(&sort(rows(), SortKey::Id)), vec![1, 2, 3]);
        assert_eq!(ids(&sort(rows(), SortKey::Name)), vec![1, 2, 3]);
        assert_eq!(ids(&sort(rows(), SortKey::Birthday)), vec![2, 1, 3]);
    }

    #[test]
    fn sort_is_stable() {
        // carol and alice tie on experience and keep their input order
        assert_eq!(ids(&sort(rows(), SortKey::Experience)), vec![2, 3, 1]);
    }

    #[test]
    fn parse_and_display() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert!("name".parse::<SortKey>().is_err());
        assert!("AGE".parse::<SortKey>().is_err());
    }

    #[test]
    fn serde_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&SortKey::Birthday).unwrap(), "\"BIRTHDAY\"");
        let key: SortKey = serde_json::from_str("\"LEVEL\"").unwrap();
        assert_eq!(key, SortKey::Level);
    }
}
