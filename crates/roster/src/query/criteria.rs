//! Filter criteria and the filter engine.
//!
//! [`Criteria`] holds the optional predicates a caller can combine when
//! listing or counting players. Every present predicate is compiled into a
//! [`Clause`]; a record passes when all clauses match.
//!
//! # Example
//!
//! ```
//! use roster::{Criteria, Race};
//!
//! let criteria = Criteria::new()
//!     .name("ar")
//!     .race(Race::Elf)
//!     .min_level(3)
//!     .banned(false);
//!
//! assert_eq!(criteria.clauses().len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{Profession, Race};
use crate::query::clause::{Clause, ClauseValue};
use crate::query::op::Op;
use crate::query::traits::{Field, Fields};
use crate::query::value::Timestamp;

/// Optional filter predicates, combined with AND.
///
/// An absent predicate imposes no constraint. Range bounds are inclusive
/// and an explicit `Some(0)` is a real bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the title.
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Earliest birthday, inclusive.
    pub birthday_after: Option<Timestamp>,
    /// Latest birthday, inclusive.
    pub birthday_before: Option<Timestamp>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    pub banned: Option<bool>,
}

impl Criteria {
    /// Creates empty criteria, which match every record.
    pub fn new() -> Self {
        Criteria::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    pub fn name(mut self, fragment: impl Into<String>) -> Self {
        self.name = Some(fragment.into());
        self
    }

    pub fn title(mut self, fragment: impl Into<String>) -> Self {
        self.title = Some(fragment.into());
        self
    }

    pub fn race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    pub fn profession(mut self, profession: Profession) -> Self {
        self.profession = Some(profession);
        self
    }

    pub fn born_after(mut self, ts: impl Into<Timestamp>) -> Self {
        self.birthday_after = Some(ts.into());
        self
    }

    pub fn born_before(mut self, ts: impl Into<Timestamp>) -> Self {
        self.birthday_before = Some(ts.into());
        self
    }

    pub fn min_experience(mut self, experience: i32) -> Self {
        self.min_experience = Some(experience);
        self
    }

    pub fn max_experience(mut self, experience: i32) -> Self {
        self.max_experience = Some(experience);
        self
    }

    pub fn min_level(mut self, level: i32) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn max_level(mut self, level: i32) -> Self {
        self.max_level = Some(level);
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = Some(banned);
        self
    }

    // ========================================================================
    // Compilation
    // ========================================================================

    /// Compiles the present predicates into clauses.
    ///
    /// Empty `name` and `title` fragments are dropped: every string
    /// contains the empty string.
    pub fn clauses(&self) -> Vec<Clause> {
        let mut clauses = Vec::new();

        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            clauses.push(Clause::new(Field::Name, Op::Contains, name));
        }
        if let Some(title) = self.title.as_deref().filter(|s| !s.is_empty()) {
            clauses.push(Clause::new(Field::Title, Op::Contains, title));
        }
        if let Some(race) = &self.race {
            clauses.push(Clause::new(Field::Race, Op::Eq, ClauseValue::of_enum(race)));
        }
        if let Some(profession) = &self.profession {
            clauses.push(Clause::new(
                Field::Profession,
                Op::Eq,
                ClauseValue::of_enum(profession),
            ));
        }
        if let Some(after) = self.birthday_after {
            clauses.push(Clause::new(Field::Birthday, Op::Gte, after));
        }
        if let Some(before) = self.birthday_before {
            clauses.push(Clause::new(Field::Birthday, Op::Lte, before));
        }
        if let Some(min) = self.min_experience {
            clauses.push(Clause::new(Field::Experience, Op::Gte, min));
        }
        if let Some(max) = self.max_experience {
            clauses.push(Clause::new(Field::Experience, Op::Lte, max));
        }
        if let Some(min) = self.min_level {
            clauses.push(Clause::new(Field::Level, Op::Gte, min));
        }
        if let Some(max) = self.max_level {
            clauses.push(Clause::new(Field::Level, Op::Lte, max));
        }
        if let Some(banned) = self.banned {
            clauses.push(Clause::new(Field::Banned, Op::Eq, banned));
        }

        clauses
    }

    /// Returns `true` if no predicate constrains the result.
    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests a single record.
    pub fn matches<T: Fields>(&self, item: &T) -> bool {
        self.clauses().iter().all(|clause| clause.test(item))
    }

    /// Returns references to the matching records, in input order.
    pub fn filter<'a, T: Fields>(&self, items: &'a [T]) -> Vec<&'a T> {
        let clauses = self.clauses();
        items
            .iter()
            .filter(|item| clauses.iter().all(|clause| clause.test(*item)))
            .collect()
    }

    /// Consumes `items` and keeps the matching records, in input order.
    pub fn retain<T: Fields>(&self, items: Vec<T>) -> Vec<T> {
        let clauses = self.clauses();
        items
            .into_iter()
            .filter(|item| clauses.iter().all(|clause| clause.test(item)))
            .collect()
    }

    /// Counts the matching records.
    pub fn count<T: Fields>(&self, items: &[T]) -> usize {
        let clauses = self.clauses();
        items
            .iter()
            .filter(|item| clauses.iter().all(|clause| clause.test(*item)))
            .count()
    }
}
