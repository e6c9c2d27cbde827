//! Field-level validation of player drafts.
//!
//! Two validators share one report type:
//!
//! - [`required_fields`] runs on creation. It rejects absent or blank
//!   required attributes and then applies [`value_range`].
//! - [`value_range`] runs on creation and on update. It checks only the
//!   attributes that are present.
//!
//! Neither validator fails fast; every violation found is reported, and the
//! caller decides what a non-empty report means.

use std::fmt;

use serde::Serialize;

use crate::model::PlayerDraft;
use crate::query::{Field, Timestamp};

/// Longest accepted name, in characters.
pub const NAME_MAX_LEN: usize = 12;

/// Longest accepted title, in characters.
pub const TITLE_MAX_LEN: usize = 30;

/// Highest accepted experience.
pub const EXPERIENCE_MAX: i32 = 10_000_000;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "kebab-case")]
pub enum Violation {
    /// Required on creation but absent or blank.
    Missing,
    /// Longer than `max` characters.
    TooLong { max: usize },
    /// Outside the accepted range.
    OutOfRange,
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    #[serde(flatten)]
    pub violation: Violation,
}

impl FieldError {
    pub fn new(field: Field, violation: Violation) -> Self {
        FieldError { field, violation }
    }

    /// Human-readable description of the violation.
    pub fn message(&self) -> String {
        match (self.violation, self.field) {
            (Violation::Missing, field) => format!("{field} is required"),
            (Violation::TooLong { max }, Field::Name) => {
                format!("Name cannot exceed {max} characters")
            }
            (Violation::TooLong { max }, Field::Title) => {
                format!("Title cannot exceed {max} characters")
            }
            (Violation::TooLong { max }, field) => {
                format!("{field} cannot exceed {max} characters")
            }
            (Violation::OutOfRange, Field::Birthday) => {
                "Birthday must be at least 2000 and not more than 3000".to_string()
            }
            (Violation::OutOfRange, Field::Experience) => {
                "Experience must be at least 0 and not more than 10,000,000".to_string()
            }
            (Violation::OutOfRange, field) => format!("{field} is out of range"),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Accumulated validation findings, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn reject(&mut self, field: Field, violation: Violation) {
        self.push(FieldError::new(field, violation));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Returns `true` if `field` has at least one violation.
    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Violations recorded for `field`.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = Violation> + '_ {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.violation)
    }

    /// `Ok(())` when nothing was found, the report otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Creation-time validation.
///
/// `name` and `title` must be present and not blank; `race`, `profession`,
/// `birthday` and `experience` must be present. The range checks of
/// [`value_range`] follow.
pub fn required_fields(draft: &PlayerDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(draft.name.as_deref()) {
        errors.reject(Field::Name, Violation::Missing);
    }
    if is_blank(draft.title.as_deref()) {
        errors.reject(Field::Title, Violation::Missing);
    }
    if draft.race.is_none() {
        errors.reject(Field::Race, Violation::Missing);
    }
    if draft.profession.is_none() {
        errors.reject(Field::Profession, Violation::Missing);
    }
    if draft.birthday.is_none() {
        errors.reject(Field::Birthday, Violation::Missing);
    }
    if draft.experience.is_none() {
        errors.reject(Field::Experience, Violation::Missing);
    }

    check_ranges(draft, &mut errors);
    errors
}

/// Range validation of the attributes present in `draft`.
pub fn value_range(draft: &PlayerDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_ranges(draft, &mut errors);
    errors
}

fn check_ranges(draft: &PlayerDraft, errors: &mut ValidationErrors) {
    if let Some(name) = &draft.name {
        if name.chars().count() > NAME_MAX_LEN {
            errors.reject(Field::Name, Violation::TooLong { max: NAME_MAX_LEN });
        }
    }
    if let Some(title) = &draft.title {
        if title.chars().count() > TITLE_MAX_LEN {
            errors.reject(Field::Title, Violation::TooLong { max: TITLE_MAX_LEN });
        }
    }
    if let Some(birthday) = draft.birthday {
        if !(Timestamp::MIN_BIRTHDAY..=Timestamp::MAX_BIRTHDAY).contains(&birthday) {
            errors.reject(Field::Birthday, Violation::OutOfRange);
        }
    }
    if let Some(experience) = draft.experience {
        if !(0..=EXPERIENCE_MAX).contains(&experience) {
            errors.reject(Field::Experience, Violation::OutOfRange);
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Profession, Race};

    fn valid_draft() -> PlayerDraft {
        PlayerDraft::new()
            .name("Legolas")
            .title("Prince of Mirkwood")
            .race(Race::Elf)
            .profession(Profession::Warrior)
            .birthday(Timestamp::MIN_BIRTHDAY)
            .experience(0)
    }

    #[test]
    fn valid_draft_passes_both_validators() {
        assert!(required_fields(&valid_draft()).is_empty());
        assert!(value_range(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_passes_value_range() {
        assert!(value_range(&PlayerDraft::new()).is_empty());
    }

    #[test]
    fn empty_draft_fails_every_required_field() {
        let errors = required_fields(&PlayerDraft::new());
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|e| e.violation == Violation::Missing));
    }

    #[test]
    fn blank_strings_are_missing() {
        let draft = valid_draft().name("   ").title("\t");
        let errors = required_fields(&draft);
        assert_eq!(errors.for_field(Field::Name).collect::<Vec<_>>(), vec![Violation::Missing]);
        assert_eq!(errors.for_field(Field::Title).collect::<Vec<_>>(), vec![Violation::Missing]);
        // blank is not a range problem
        assert!(value_range(&draft).is_empty());
    }

    #[test]
    fn name_length_boundary() {
        assert!(value_range(&PlayerDraft::new().name("a".repeat(12))).is_empty());
        let errors = value_range(&PlayerDraft::new().name("a".repeat(13)));
        assert_eq!(
            errors.for_field(Field::Name).collect::<Vec<_>>(),
            vec![Violation::TooLong { max: 12 }]
        );
    }

    #[test]
    fn name_length_counts_characters() {
        // 12 characters, 24 bytes
        assert!(value_range(&PlayerDraft::new().name("ж".repeat(12))).is_empty());
    }

    #[test]
    fn title_length_boundary() {
        assert!(value_range(&PlayerDraft::new().title("t".repeat(30))).is_empty());
        assert!(value_range(&PlayerDraft::new().title("t".repeat(31))).has(Field::Title));
    }

    #[test]
    fn experience_boundary() {
        assert!(value_range(&PlayerDraft::new().experience(0)).is_empty());
        assert!(value_range(&PlayerDraft::new().experience(10_000_000)).is_empty());
        assert!(value_range(&PlayerDraft::new().experience(10_000_001)).has(Field::Experience));
        assert!(value_range(&PlayerDraft::new().experience(-1)).has(Field::Experience));
    }

    #[test]
    fn birthday_bounds_are_inclusive() {
        let min = Timestamp::MIN_BIRTHDAY;
        let max = Timestamp::MAX_BIRTHDAY;
        assert!(value_range(&PlayerDraft::new().birthday(min)).is_empty());
        assert!(value_range(&PlayerDraft::new().birthday(max)).is_empty());
        assert!(value_range(&PlayerDraft::new().birthday(min.as_millis() - 1)).has(Field::Birthday));
        assert!(value_range(&PlayerDraft::new().birthday(max.as_millis() + 1)).has(Field::Birthday));
    }

    #[test]
    fn violations_accumulate() {
        let draft = PlayerDraft::new()
            .name("n".repeat(13))
            .title("t".repeat(31))
            .experience(-5)
            .birthday(Timestamp(0));
        let errors = value_range(&draft);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn messages_follow_field() {
        let errors = value_range(&PlayerDraft::new().name("n".repeat(13)).experience(-1));
        assert_eq!(
            errors.to_string(),
            "name: Name cannot exceed 12 characters; \
             experience: Experience must be at least 0 and not more than 10,000,000"
        );
    }

    #[test]
    fn into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Race, Violation::Missing);
        assert_eq!(errors.clone().into_result(), Err(errors));
    }

    #[test]
    fn serializes_as_list_of_field_codes() {
        let errors = value_range(&PlayerDraft::new().name("n".repeat(13)));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "field": "name", "code": "too-long", "max": 12 }])
        );
    }
}
