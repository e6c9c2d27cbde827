//! Error types for the roster crate.

use thiserror::Error;

use crate::store::StoreError;
use crate::validate::ValidationErrors;

/// Errors returned by [`PlayerService`](crate::PlayerService) operations.
///
/// Not-found is not an error: lookups, updates and deletes of an unknown id
/// return `Ok(None)`.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The write was rejected; nothing was persisted.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The record store failed. Propagated unchanged, never retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RosterError {
    /// Returns the validation report, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RosterError::Validation(errors) => Some(errors),
            RosterError::Store(_) => None,
        }
    }
}

impl From<ValidationErrors> for RosterError {
    fn from(errors: ValidationErrors) -> Self {
        RosterError::Validation(errors)
    }
}

/// Unrecognized name for a closed enum (race, profession, sort order).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseKindError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        ParseKindError {
            kind,
            value: value.into(),
        }
    }
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Field;
    use crate::validate::Violation;

    #[test]
    fn validation_error_display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.reject(Field::Race, Violation::Missing);
        let err = RosterError::from(errors);
        assert_eq!(err.to_string(), "validation failed: race: race is required");
        assert_eq!(err.validation_errors().map(ValidationErrors::len), Some(1));
    }

    #[test]
    fn store_error_is_transparent() {
        let err = RosterError::from(StoreError::LockPoisoned);
        assert_eq!(err.to_string(), StoreError::LockPoisoned.to_string());
        assert!(err.validation_errors().is_none());
    }

    #[test]
    fn parse_kind_error_display() {
        assert_eq!(ParseKindError::new("race", "ENT").to_string(), "unknown race 'ENT'");
    }
}
