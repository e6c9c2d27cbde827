//! Field access for queryable records.
//!
//! The filter engine and the sorter never look at struct fields directly;
//! they ask the record for a [`Value`] through the [`Fields`] trait.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::query::value::Value;

/// Attributes of a player record that can be filtered, sorted or reported
/// in a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Experience,
    Level,
    Banned,
}

impl Field {
    /// Returns the wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Title => "title",
            Field::Race => "race",
            Field::Profession => "profession",
            Field::Birthday => "birthday",
            Field::Experience => "experience",
            Field::Level => "level",
            Field::Banned => "banned",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for records that can be queried.
///
/// ```
/// use roster::{Field, Fields, Value};
///
/// struct Row {
///     name: String,
///     level: i32,
/// }
///
/// impl Fields for Row {
///     fn field_value(&self, field: Field) -> Value<'_> {
///         match field {
///             Field::Name => Value::String(&self.name),
///             _ => Value::Int(i64::from(self.level)),
///         }
///     }
/// }
/// ```
pub trait Fields {
    /// Returns the value of a field for comparison.
    fn field_value(&self, field: Field) -> Value<'_>;
}

/// Stable discriminant for closed enum types.
///
/// Enums compare as their discriminant inside the query engine, so the
/// values must never be renumbered.
pub trait Discriminant {
    /// Returns the discriminant value for this variant.
    fn discriminant(&self) -> u32;
}
